//! DirectShow device enumeration backend
//!
//! This module walks the DirectShow video-input device category through the
//! system device enumerator COM object and reads each device's display name
//! from its property bag.
//!
//! COM lifetime rules are handled with RAII throughout: [`ComGuard`] brackets
//! `CoInitializeEx`/`CoUninitialize` around a listing call, and every
//! interface pointer (category enumerator, moniker, property bag) is released
//! when its wrapper drops at the end of its scope. A listing pass therefore
//! leaves no platform handle open on any exit path, early error returns
//! included.

use crate::core::error::{ListingError, Result};
use crate::device::traits::{VideoDeviceEnumerator, VideoDeviceInfo};
use log::{debug, trace};
use std::ffi::c_void;
use windows::{
    core::{w, Interface, PCWSTR, BSTR, VARIANT},
    Win32::{
        Media::DirectShow::{
            CLSID_SystemDeviceEnum, CLSID_VideoInputDeviceCategory, ICreateDevEnum,
        },
        System::Com::{
            CoCreateInstance, CoInitializeEx, CoUninitialize, IEnumMoniker, IMoniker,
            StructuredStorage::IPropertyBag, CLSCTX_INPROC_SERVER, COINIT_MULTITHREADED,
        },
    },
};

/// Enumerates video capture devices via the DirectShow system device
/// enumerator
pub struct DirectShowEnumerator {
    dev_enum: ICreateDevEnum,
}

impl DirectShowEnumerator {
    /// Create a new DirectShowEnumerator (COM must already be initialized)
    pub fn new() -> Result<Self> {
        unsafe {
            let dev_enum: ICreateDevEnum =
                CoCreateInstance(&CLSID_SystemDeviceEnum, None, CLSCTX_INPROC_SERVER).map_err(
                    |e| {
                        ListingError::EnumeratorCreation(format!(
                            "Failed to create system device enumerator: {}",
                            e
                        ))
                    },
                )?;

            Ok(Self { dev_enum })
        }
    }

    /// Obtain a single-use moniker enumerator for the video-input category
    ///
    /// The category enumerator is stateful and supports exactly one forward
    /// pass, so a fresh one is created per listing call.
    fn create_category_enumerator(&self) -> Result<IEnumMoniker> {
        let mut enumerator: Option<IEnumMoniker> = None;

        unsafe {
            self.dev_enum
                .CreateClassEnumerator(&CLSID_VideoInputDeviceCategory, &mut enumerator, 0)
                .map_err(|e| {
                    ListingError::EnumeratorCreation(format!(
                        "Failed to enumerate the video-input category: {}",
                        e
                    ))
                })?;
        }

        // CreateClassEnumerator succeeds with S_FALSE and hands back no
        // enumerator when the category has no registered devices.
        enumerator.ok_or(ListingError::NoDevicesFound)
    }
}

impl VideoDeviceEnumerator for DirectShowEnumerator {
    fn enumerate_video_devices(&self) -> Result<Vec<VideoDeviceInfo>> {
        let enumerator = self.create_category_enumerator()?;
        let mut devices = Vec::new();

        loop {
            let mut slot: [Option<IMoniker>; 1] = [None];

            // S_FALSE (nothing fetched) leaves the slot empty
            let hr = unsafe { enumerator.Next(&mut slot, None) };
            if hr.is_err() {
                break;
            }
            let Some(moniker) = slot[0].take() else {
                break;
            };

            // One malformed device must not abort the rest of the pass
            match device_from_moniker(&moniker) {
                Ok(Some(info)) => {
                    trace!("found video device: {}", info.name);
                    devices.push(info);
                }
                Ok(None) => {
                    debug!("skipping device with no readable Description or FriendlyName");
                }
                Err(e) => {
                    debug!("skipping device whose property bag could not be read: {}", e);
                }
            }
        }

        Ok(devices)
    }
}

/// Read one device's properties and resolve its display name
///
/// Returns `Ok(None)` when the device exposes neither name property. The
/// moniker and its property bag are released when this call returns,
/// whatever the outcome.
fn device_from_moniker(moniker: &IMoniker) -> windows::core::Result<Option<VideoDeviceInfo>> {
    let bag = bind_to_property_bag(moniker)?;

    let description = read_bag_string(&bag, w!("Description")).ok();
    let friendly_name = if description.is_none() {
        read_bag_string(&bag, w!("FriendlyName")).ok()
    } else {
        None
    };
    let device_path = read_bag_string(&bag, w!("DevicePath")).ok();

    Ok(VideoDeviceInfo::from_properties(
        description,
        friendly_name,
        device_path,
    ))
}

/// Bind a device moniker to its property bag
fn bind_to_property_bag(moniker: &IMoniker) -> windows::core::Result<IPropertyBag> {
    let mut raw: *mut c_void = std::ptr::null_mut();
    unsafe {
        moniker.BindToStorage(None, None, &IPropertyBag::IID, &mut raw)?;
        // BindToStorage hands over an owned reference
        Ok(IPropertyBag::from_raw(raw))
    }
}

/// Read a string-valued property from a property bag
fn read_bag_string(bag: &IPropertyBag, property: PCWSTR) -> windows::core::Result<String> {
    let mut value = VARIANT::default();
    unsafe {
        bag.Read(property, &mut value, None)?;
    }
    let text = BSTR::try_from(&value)?;
    Ok(text.to_string())
}

/// RAII guard for COM initialization
pub struct ComGuard {
    initialized: bool,
}

impl ComGuard {
    /// Initialize COM for the current thread
    pub fn new() -> Result<Self> {
        unsafe {
            CoInitializeEx(None, COINIT_MULTITHREADED)
                .ok()
                .map_err(|e| ListingError::ComInit(format!("Failed to initialize COM: {}", e)))?;

            Ok(Self { initialized: true })
        }
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.initialized {
            unsafe {
                CoUninitialize();
            }
        }
    }
}

/// Initialize COM and return a guard that will uninitialize on drop
pub fn initialize_com() -> Result<ComGuard> {
    ComGuard::new()
}
