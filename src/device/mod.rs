//! Device enumeration module
//!
//! This module provides enumeration of the video capture devices attached to
//! the host, via the DirectShow device-enumeration COM interfaces on Windows.
//!
//! # Submodules
//!
//! - `dshow` - DirectShow backend (Windows only)
//! - `traits` - Abstraction traits for testability
//!
//! # Architecture
//!
//! The module uses a trait-based abstraction to enable testing without real
//! hardware: both the DirectShow backend and the mock enumerators in
//! [`crate::testdb`] implement [`VideoDeviceEnumerator`]. The free functions
//! below are the plain entry points for callers that just want the list.

pub mod traits;

#[cfg(windows)]
pub mod dshow;

// Re-export commonly used types from traits for convenience
pub use traits::{join_device_names, VideoDeviceEnumerator, VideoDeviceInfo};

#[cfg(windows)]
pub use dshow::{initialize_com, ComGuard, DirectShowEnumerator};

use crate::core::error::Result;

/// List all attached video capture devices
///
/// Initializes COM for the calling thread, runs one enumeration pass over
/// the video-input category, and tears COM down again before returning. The
/// platform context is scoped to this call on every exit path.
#[cfg(windows)]
pub fn list_video_devices() -> Result<Vec<VideoDeviceInfo>> {
    let _com_guard = initialize_com()?;
    let enumerator = DirectShowEnumerator::new()?;
    enumerator.enumerate_video_devices()
}

/// List all attached video capture devices
///
/// There is no enumeration backend for this operating system; always fails
/// with [`ListingError::UnsupportedPlatform`](crate::core::error::ListingError::UnsupportedPlatform).
#[cfg(not(windows))]
pub fn list_video_devices() -> Result<Vec<VideoDeviceInfo>> {
    Err(crate::core::error::ListingError::UnsupportedPlatform)
}

/// List the display names of all attached video capture devices
pub fn list_video_device_names() -> Result<Vec<String>> {
    Ok(list_video_devices()?.into_iter().map(|d| d.name).collect())
}

/// List attached video capture devices as one newline-joined string
///
/// No separator before the first name or after the last; zero devices would
/// surface as an error before this point, so the result is never empty.
pub fn list_video_devices_joined() -> Result<String> {
    Ok(join_device_names(&list_video_devices()?))
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;
    use crate::core::error::ListingError;

    #[test]
    fn test_listing_reports_unsupported_platform() {
        assert!(matches!(
            list_video_devices(),
            Err(ListingError::UnsupportedPlatform)
        ));
        assert!(matches!(
            list_video_device_names(),
            Err(ListingError::UnsupportedPlatform)
        ));
        assert!(matches!(
            list_video_devices_joined(),
            Err(ListingError::UnsupportedPlatform)
        ));
    }
}
