//! Error types for the video device lister
//!
//! This module defines the error types used throughout the application.
//!
//! Category-level failures (COM startup, enumerator creation, empty device
//! category) abort a listing pass and are surfaced to the caller. Per-device
//! failures never are: a device whose property bag cannot be bound or read is
//! skipped and enumeration continues with the next one.

use thiserror::Error;

/// Main error type for the video device lister
#[derive(Error, Debug)]
pub enum ListingError {
    /// COM library initialization failed
    #[error("COM initialization failed: {0}")]
    ComInit(String),

    /// The system device enumerator could not be created, or the category
    /// enumerator could not be obtained from it
    #[error("Failed to create device enumerator: {0}")]
    EnumeratorCreation(String),

    /// The video-input device category is empty
    #[error("No video capture devices found. Make sure a camera is connected and its driver is installed.")]
    NoDevicesFound,

    /// No device enumeration backend exists for this operating system
    #[error("Video device enumeration is only supported on Windows.")]
    UnsupportedPlatform,

    /// Windows API error
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsError(#[from] windows::core::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ListingError>;
