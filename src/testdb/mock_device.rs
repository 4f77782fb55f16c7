//! Mock device enumerator for testing without a camera
//!
//! This module provides a mock implementation of the device enumeration
//! interface that simulates the video-input category with a configurable set
//! of entries, including malformed ones. It also counts simulated handle
//! acquisitions and releases so tests can verify that a listing pass is
//! leak-free on every exit path.

use crate::core::error::{ListingError, Result};
use crate::device::traits::{VideoDeviceEnumerator, VideoDeviceInfo};
use std::sync::atomic::{AtomicUsize, Ordering};

/// One simulated entry in the video-input device category
#[derive(Debug, Clone, Default)]
pub struct MockDeviceEntry {
    /// The "Description" property, when readable
    pub description: Option<String>,
    /// The "FriendlyName" property, when readable
    pub friendly_name: Option<String>,
    /// The "DevicePath" property, when readable
    pub device_path: Option<String>,
    /// Simulate the property-bag bind failing for this entry
    pub bind_fails: bool,
}

impl MockDeviceEntry {
    /// Entry exposing a "Description" property
    pub fn with_description(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    /// Entry exposing only a "FriendlyName" property
    pub fn with_friendly_name(friendly_name: &str) -> Self {
        Self {
            friendly_name: Some(friendly_name.to_string()),
            ..Default::default()
        }
    }

    /// Entry exposing both name properties
    pub fn with_both(description: &str, friendly_name: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            friendly_name: Some(friendly_name.to_string()),
            ..Default::default()
        }
    }

    /// Entry whose property bag binds but exposes neither name property
    pub fn unreadable() -> Self {
        Self::default()
    }

    /// Entry whose property bag cannot be bound at all
    pub fn bind_failure() -> Self {
        Self {
            bind_fails: true,
            ..Default::default()
        }
    }

    /// Attach a "DevicePath" property to this entry
    pub fn with_path(mut self, device_path: &str) -> Self {
        self.device_path = Some(device_path.to_string());
        self
    }
}

/// Mock implementation of [`VideoDeviceEnumerator`]
///
/// Mirrors the real backend's semantics: an empty category is an error
/// distinguishable from a pass that skipped every entry, and per-entry
/// failures never abort the pass.
#[derive(Debug, Default)]
pub struct MockEnumerator {
    entries: Vec<MockDeviceEntry>,
    fail_creation: bool,
    monikers_acquired: AtomicUsize,
    monikers_released: AtomicUsize,
    bags_acquired: AtomicUsize,
    bags_released: AtomicUsize,
}

impl MockEnumerator {
    /// Create a mock enumerator over the given category entries
    pub fn new(entries: Vec<MockDeviceEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    /// Create a mock whose category enumerator cannot be created
    pub fn failing() -> Self {
        Self {
            fail_creation: true,
            ..Default::default()
        }
    }

    /// Create a mock with an empty video-input category
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of simulated moniker handles handed out so far
    pub fn monikers_acquired(&self) -> usize {
        self.monikers_acquired.load(Ordering::SeqCst)
    }

    /// Number of simulated property bags handed out so far
    pub fn bags_acquired(&self) -> usize {
        self.bags_acquired.load(Ordering::SeqCst)
    }

    /// Whether every handle handed out so far has been released again
    pub fn handles_balanced(&self) -> bool {
        self.monikers_acquired.load(Ordering::SeqCst)
            == self.monikers_released.load(Ordering::SeqCst)
            && self.bags_acquired.load(Ordering::SeqCst)
                == self.bags_released.load(Ordering::SeqCst)
    }
}

impl VideoDeviceEnumerator for MockEnumerator {
    fn enumerate_video_devices(&self) -> Result<Vec<VideoDeviceInfo>> {
        if self.fail_creation {
            return Err(ListingError::EnumeratorCreation(
                "simulated enumerator creation failure".to_string(),
            ));
        }

        // The real category enumerator reports an empty category as a
        // distinct condition rather than yielding zero monikers.
        if self.entries.is_empty() {
            return Err(ListingError::NoDevicesFound);
        }

        let mut devices = Vec::new();

        for entry in &self.entries {
            self.monikers_acquired.fetch_add(1, Ordering::SeqCst);

            if entry.bind_fails {
                // Bind failure: no bag was ever acquired, the moniker is
                // still released, and the pass continues.
                self.monikers_released.fetch_add(1, Ordering::SeqCst);
                continue;
            }

            self.bags_acquired.fetch_add(1, Ordering::SeqCst);

            if let Some(info) = VideoDeviceInfo::from_properties(
                entry.description.clone(),
                entry.friendly_name.clone(),
                entry.device_path.clone(),
            ) {
                devices.push(info);
            }

            self.bags_released.fetch_add(1, Ordering::SeqCst);
            self.monikers_released.fetch_add(1, Ordering::SeqCst);
        }

        Ok(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::traits::join_device_names;

    fn three_camera_category() -> MockEnumerator {
        MockEnumerator::new(vec![
            MockDeviceEntry::with_description("Integrated Webcam"),
            MockDeviceEntry::with_friendly_name("USB2.0 Camera")
                .with_path(r"\\?\usb#vid_1908&pid_2311"),
            MockDeviceEntry::with_both("HD Pro Webcam C920", "Logitech Webcam"),
        ])
    }

    #[test]
    fn test_enumerates_all_readable_devices() {
        let mock = three_camera_category();
        let devices = mock.enumerate_video_devices().unwrap();

        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].name, "Integrated Webcam");
        assert_eq!(devices[1].name, "USB2.0 Camera");
        // Description wins over FriendlyName
        assert_eq!(devices[2].name, "HD Pro Webcam C920");
    }

    #[test]
    fn test_empty_category_is_distinguishable() {
        let mock = MockEnumerator::empty();
        let err = mock.enumerate_video_devices().unwrap_err();
        assert!(matches!(err, ListingError::NoDevicesFound));
    }

    #[test]
    fn test_creation_failure() {
        let mock = MockEnumerator::failing();
        let err = mock.enumerate_video_devices().unwrap_err();
        assert!(matches!(err, ListingError::EnumeratorCreation(_)));
    }

    #[test]
    fn test_malformed_entries_are_skipped_not_fatal() {
        let mock = MockEnumerator::new(vec![
            MockDeviceEntry::with_description("Cam A"),
            MockDeviceEntry::unreadable(),
            MockDeviceEntry::bind_failure(),
            MockDeviceEntry::with_description("Cam B"),
        ]);

        let devices = mock.enumerate_video_devices().unwrap();

        // The two bad entries vanish; the device after them is still listed
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Cam A");
        assert_eq!(devices[1].name, "Cam B");
    }

    #[test]
    fn test_repeated_passes_report_the_same_devices() {
        let mock = three_camera_category();

        let first: Vec<String> = mock
            .enumerate_video_devices()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        let second: Vec<String> = mock
            .enumerate_video_devices()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_device_count() {
        let mock = three_camera_category();
        assert_eq!(mock.device_count().unwrap(), 3);
    }

    #[test]
    fn test_joined_output_has_no_leading_or_trailing_separator() {
        let mock = MockEnumerator::new(vec![
            MockDeviceEntry::with_description("Cam A"),
            MockDeviceEntry::with_description("Cam B"),
        ]);

        let devices = mock.enumerate_video_devices().unwrap();
        assert_eq!(join_device_names(&devices), "Cam A\nCam B");
    }

    #[test]
    fn test_handles_balanced_after_clean_pass() {
        let mock = three_camera_category();
        mock.enumerate_video_devices().unwrap();

        assert_eq!(mock.monikers_acquired(), 3);
        assert_eq!(mock.bags_acquired(), 3);
        assert!(mock.handles_balanced());
    }

    #[test]
    fn test_handles_balanced_after_per_entry_failures() {
        let mock = MockEnumerator::new(vec![
            MockDeviceEntry::with_description("Cam A"),
            MockDeviceEntry::bind_failure(),
            MockDeviceEntry::unreadable(),
        ]);
        mock.enumerate_video_devices().unwrap();

        assert_eq!(mock.monikers_acquired(), 3);
        // The bind failure never produced a bag to release
        assert_eq!(mock.bags_acquired(), 2);
        assert!(mock.handles_balanced());
    }

    #[test]
    fn test_device_path_carried_through() {
        let mock = MockEnumerator::new(vec![MockDeviceEntry::with_friendly_name("USB2.0 Camera")
            .with_path(r"\\?\usb#vid_1908&pid_2311")]);

        let devices = mock.enumerate_video_devices().unwrap();
        assert_eq!(
            devices[0].device_path.as_deref(),
            Some(r"\\?\usb#vid_1908&pid_2311")
        );
    }
}
