//! Device abstraction traits for testability
//!
//! This module defines the trait that abstracts video device enumeration,
//! allowing the real backend (DirectShow on Windows) and mock enumerators to
//! be used interchangeably. This enables testing of the listing pipeline and
//! the CLI on machines with no camera attached, and on non-Windows hosts.
//!
//! # Architecture
//!
//! - `VideoDeviceEnumerator` - One-pass enumeration of the video-input
//!   category
//! - `VideoDeviceInfo` - Owned device information structure (shared between
//!   real and mock backends)
//!
//! The display name of a device is resolved from two properties exposed by
//! its property bag: "Description" is preferred, "FriendlyName" is the
//! fallback. A device exposing neither is excluded from results.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};

/// Information about one attached video capture device
///
/// This is an owned value type: nothing in it borrows platform memory, so it
/// stays valid for as long as the caller keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDeviceInfo {
    /// Human-readable display name ("Description" property when present,
    /// otherwise "FriendlyName")
    pub name: String,
    /// Unique device path, when the host exposes one (e.g. the DirectShow
    /// "DevicePath" property)
    pub device_path: Option<String>,
}

impl VideoDeviceInfo {
    /// Create a new VideoDeviceInfo with just a display name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            device_path: None,
        }
    }

    /// Create a new VideoDeviceInfo with a display name and device path
    pub fn with_path(name: &str, device_path: &str) -> Self {
        Self {
            name: name.to_string(),
            device_path: Some(device_path.to_string()),
        }
    }

    /// Resolve a device entry from its raw name properties
    ///
    /// The "Description" property wins when both are readable; a device with
    /// neither property yields `None` and is skipped by callers.
    pub fn from_properties(
        description: Option<String>,
        friendly_name: Option<String>,
        device_path: Option<String>,
    ) -> Option<Self> {
        let name = description.or(friendly_name)?;
        Some(Self { name, device_path })
    }
}

/// Trait for video device enumeration
///
/// Both the real DirectShow backend and mock enumerators implement this
/// trait. An implementation performs a single pass over the video-input
/// device category per call; the order of results is whatever the host
/// reports and duplicates are possible if the host reports duplicate
/// devices.
pub trait VideoDeviceEnumerator: Send + Sync {
    /// Enumerate all attached video capture devices
    ///
    /// Devices whose property bag cannot be bound, or which expose neither a
    /// "Description" nor a "FriendlyName" property, are silently skipped.
    fn enumerate_video_devices(&self) -> Result<Vec<VideoDeviceInfo>>;

    /// Get the number of devices a pass would report
    fn device_count(&self) -> Result<usize> {
        Ok(self.enumerate_video_devices()?.len())
    }
}

/// Join device names with a single newline separator
///
/// No separator is added before the first entry or after the last; an empty
/// slice yields an empty string.
pub fn join_device_names(devices: &[VideoDeviceInfo]) -> String {
    devices
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_info_creation() {
        let info = VideoDeviceInfo::new("Integrated Webcam");
        assert_eq!(info.name, "Integrated Webcam");
        assert_eq!(info.device_path, None);

        let info = VideoDeviceInfo::with_path("USB Camera", r"\\?\usb#vid_046d&pid_0825");
        assert_eq!(info.name, "USB Camera");
        assert_eq!(
            info.device_path.as_deref(),
            Some(r"\\?\usb#vid_046d&pid_0825")
        );
    }

    #[test]
    fn test_description_preferred_over_friendly_name() {
        let info = VideoDeviceInfo::from_properties(
            Some("HD Pro Webcam C920".to_string()),
            Some("Logitech Webcam".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(info.name, "HD Pro Webcam C920");
    }

    #[test]
    fn test_friendly_name_fallback() {
        let info = VideoDeviceInfo::from_properties(
            None,
            Some("Logitech Webcam".to_string()),
            Some("path-0".to_string()),
        )
        .unwrap();
        assert_eq!(info.name, "Logitech Webcam");
        assert_eq!(info.device_path.as_deref(), Some("path-0"));
    }

    #[test]
    fn test_no_readable_name_yields_none() {
        assert_eq!(VideoDeviceInfo::from_properties(None, None, None), None);
        // A path alone is not enough to list a device
        assert_eq!(
            VideoDeviceInfo::from_properties(None, None, Some("path-1".to_string())),
            None
        );
    }

    #[test]
    fn test_join_device_names() {
        let devices = vec![VideoDeviceInfo::new("Cam A"), VideoDeviceInfo::new("Cam B")];
        assert_eq!(join_device_names(&devices), "Cam A\nCam B");
    }

    #[test]
    fn test_join_single_and_empty() {
        assert_eq!(join_device_names(&[VideoDeviceInfo::new("Cam A")]), "Cam A");
        assert_eq!(join_device_names(&[]), "");
    }
}
