// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::native::{self, setupapi};
use crate::owned_handle::OwnedHandle;
use crate::size_probe::{classify_sized_call, query_with_size_probe};
use crate::{DeviceInfoSetFlags, Error, Guid, Result};
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{HDEVINFO, SP_DEVINFO_DATA};
use windows_sys::Win32::Foundation::{ERROR_INSUFFICIENT_BUFFER, ERROR_NO_MORE_ITEMS};

const HANDLE_KIND: &str = "device info set";

/// Owns one device information set handle.
///
/// The handle is destroyed exactly once: by [`DeviceInfoSet::close`], or when the value is dropped (which
/// also covers every early return and `?` between opening and closing).
pub struct DeviceInfoSet {
    handle: OwnedHandle<HDEVINFO>,
}

impl DeviceInfoSet {
    /// Requests an enumeration snapshot, optionally restricted to one setup class and/or PnP enumerator.
    pub fn open(class_guid: Option<&Guid>, enumerator: Option<&str>, flags: DeviceInfoSetFlags) -> Result<Self> {
        let mut flags = flags;
        if class_guid.is_none() {
            flags = flags | DeviceInfoSetFlags::ALL_CLASSES;
        }
        let class_guid = class_guid.map(|guid| windows_sys::core::GUID::from(*guid));
        // NOTE: the wide string must outlive the call, so it is bound here rather than inside the map
        let enumerator_as_utf16_chars = enumerator.map(native::to_wide);

        let handle = setupapi::get_class_devs(class_guid.as_ref(), enumerator_as_utf16_chars.as_deref(), flags.0)?;
        tracing::trace!(?enumerator, class_guid = ?class_guid.map(Guid::from), flags = flags.0, "opened device info set");
        Ok(Self::from_handle(handle))
    }

    /// An empty set, used to open individual devices by instance ID.
    pub fn create_empty() -> Result<Self> {
        let handle = setupapi::create_device_info_list()?;
        Ok(Self::from_handle(handle))
    }

    fn from_handle(handle: HDEVINFO) -> Self {
        Self { handle: OwnedHandle::new(handle, setupapi::destroy_device_info_list, HANDLE_KIND) }
    }

    /// Opens one device into an empty set by its instance ID (matched by the OS case-insensitively).
    pub fn open_device(instance_id: &str) -> Result<(Self, DeviceInfo)> {
        let device_info_set = Self::create_empty()?;
        let mut devinfo_data = setupapi::new_devinfo_data();
        setupapi::open_device_info(device_info_set.handle(), &native::to_wide(instance_id), &mut devinfo_data)?;
        Ok((device_info_set, DeviceInfo { index: 0, devinfo_data }))
    }

    /// Forward-only walk over the members of this set; each call starts again from index 0.
    pub fn iter(&self) -> DeviceInfoIter<'_> {
        DeviceInfoIter { device_info_set: self, next_index: 0, finished: false }
    }

    pub(crate) fn handle(&self) -> HDEVINFO {
        self.handle.get()
    }

    /// Resolves the instance ID of a member of this set.
    pub fn instance_id(&self, device_info: &DeviceInfo) -> Result<String> {
        let chars = query_with_size_probe(0u16, |buffer| {
            let mut required_size: u32 = 0;
            let result = setupapi::get_device_instance_id(self.handle(), &device_info.devinfo_data, buffer, &mut required_size);
            classify_sized_call(result, required_size, ERROR_INSUFFICIENT_BUFFER)
        })?;
        // required_size includes the null terminator
        let end = chars.iter().position(|ch| *ch == 0).unwrap_or(chars.len());
        Ok(String::from_utf16(&chars[..end])?)
    }

    /// Destroys the handle now, reporting failure instead of logging it.
    pub fn close(self) -> Result<()> {
        self.handle.close()
    }
}

/// One member of a [`DeviceInfoSet`]: its index plus the OS-filled SP_DEVINFO_DATA.
///
/// Only meaningful together with the set it came from.
#[derive(Clone, Copy)]
pub struct DeviceInfo {
    pub index: u32,
    pub(crate) devinfo_data: SP_DEVINFO_DATA,
}

impl DeviceInfo {
    pub fn class_guid(&self) -> Guid {
        Guid::from(self.devinfo_data.ClassGuid)
    }

    /// Configuration Manager devnode handle of this device.
    pub fn dev_inst(&self) -> u32 {
        self.devinfo_data.DevInst
    }
}

pub struct DeviceInfoIter<'a> {
    device_info_set: &'a DeviceInfoSet,
    next_index: u32,
    finished: bool,
}

impl<'a> Iterator for DeviceInfoIter<'a> {
    type Item = Result<DeviceInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut devinfo_data = setupapi::new_devinfo_data();
        match setupapi::enum_device_info(self.device_info_set.handle(), self.next_index, &mut devinfo_data) {
            Ok(()) => {
                let device_info = DeviceInfo { index: self.next_index, devinfo_data };
                self.next_index += 1;
                Some(Ok(device_info))
            },
            Err(error) => {
                // out of items is the normal end of the walk; anything else is surfaced once and ends it too
                self.finished = true;
                if error.code == ERROR_NO_MORE_ITEMS {
                    None
                } else {
                    Some(Err(Error::from(error)))
                }
            },
        }
    }
}
