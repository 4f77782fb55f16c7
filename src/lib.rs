//! Video Device Lister Library
//!
//! A small, reliable library for listing the video capture devices attached
//! to a Windows machine using DirectShow device enumeration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`core`] - Configuration and error handling
//! - [`device`] - Device enumeration via the DirectShow COM interfaces
//! - [`cli`] - Command-line interface (only used by the binary)
//! - [`testdb`] - Mock enumerators for testing without a camera
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use video_device_lister::device;
//!
//! fn main() -> anyhow::Result<()> {
//!     // One call: COM is initialized for the duration of the pass and torn
//!     // down again before it returns.
//!     for (index, info) in device::list_video_devices()?.iter().enumerate() {
//!         println!("[{}] {}", index, info.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Callers that want the classic newline-joined blob can use
//! [`device::list_video_devices_joined`]; the returned `String` is owned by
//! the caller.
//!
//! # Error behavior
//!
//! Category-level failures (COM startup, enumerator creation, an empty
//! video-input category) are surfaced as distinct
//! [`core::error::ListingError`] variants. Per-device failures are not
//! errors: a device whose property bag cannot be bound, or which exposes
//! neither a "Description" nor a "FriendlyName" property, is skipped and the
//! pass continues.
//!
//! # Testing Without a Camera
//!
//! The [`testdb`] module provides mock enumerators implementing the same
//! trait as the DirectShow backend:
//!
//! ```rust
//! use video_device_lister::device::VideoDeviceEnumerator;
//! use video_device_lister::testdb::{MockDeviceEntry, MockEnumerator};
//!
//! let mock = MockEnumerator::new(vec![MockDeviceEntry::with_description("Cam A")]);
//! assert_eq!(mock.enumerate_video_devices().unwrap().len(), 1);
//! ```
//!
//! # Platform Support
//!
//! This library currently only supports Windows due to its reliance on
//! DirectShow device enumeration. On other platforms everything builds and
//! the mock infrastructure works, but the listing entry points report an
//! unsupported-platform error.

// Core modules - always available
pub mod cli;
pub mod core;
pub mod device;
pub mod testdb;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
