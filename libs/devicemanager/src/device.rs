// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::device_property_key::*;
use crate::native::{self, cfgmgr32, setupapi};
use crate::size_probe::{classify_sized_call, query_with_size_probe};
use crate::{
    DeviceClass, DeviceInfo, DeviceInfoSet, DeviceManager, DevicePropertyKey, DevicePropertyValue, DeviceTree, Error, Guid,
    RegistryKey, RegistryKeyScope, RegistryKeyType, Result, KEY_READ,
};
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::CM_REENUMERATE_SYNCHRONOUS;
use windows_sys::Win32::Devices::Properties::DEVPROPKEY;
use windows_sys::Win32::Foundation::{ERROR_INSUFFICIENT_BUFFER, ERROR_NOT_FOUND};

/// Physical-device-object paths are opened through the global root of the object namespace.
const GLOBALROOT_PREFIX: &str = "\\\\?\\GLOBALROOT";

/// A device known to the device configuration manager.
///
/// Holds only the instance ID (and the setup class captured at enumeration time); every operation
/// reopens the device by instance ID in a fresh one-device info set and releases it before returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    instance_id: String,
    class_guid: Guid,
}

impl Device {
    pub(crate) fn from_device_info(device_info_set: &DeviceInfoSet, device_info: &DeviceInfo) -> Result<Self> {
        Ok(Self {
            instance_id: device_info_set.instance_id(device_info)?,
            class_guid: device_info.class_guid(),
        })
    }

    pub fn from_instance_id(instance_id: &str) -> Result<Self> {
        let (device_info_set, device_info) = DeviceInfoSet::open_device(instance_id)?;
        Self::from_device_info(&device_info_set, &device_info)
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn class_guid(&self) -> Guid {
        self.class_guid
    }

    /// The well-known class this device was installed under, if any.
    pub fn device_class(&self) -> Option<DeviceClass> {
        DeviceClass::by_setup_class_guid(&self.class_guid)
    }

    fn with_device_info<T>(&self, operation: impl FnOnce(&DeviceInfoSet, &DeviceInfo) -> Result<T>) -> Result<T> {
        let (device_info_set, device_info) = DeviceInfoSet::open_device(&self.instance_id)?;
        operation(&device_info_set, &device_info)
    }

    /// Keys of every property this device currently exposes.
    pub fn property_keys(&self) -> Result<Vec<DevicePropertyKey>> {
        self.with_device_info(read_property_keys)
    }

    /// Reads and decodes one property; [`Error::PropertyNotFound`] if the device does not have it.
    pub fn property(&self, key: &DevicePropertyKey) -> Result<DevicePropertyValue> {
        self.with_device_info(|device_info_set, device_info| read_property(device_info_set, device_info, key))
    }

    pub fn try_property(&self, key: &DevicePropertyKey) -> Result<Option<DevicePropertyValue>> {
        match self.property(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::PropertyNotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Every available property with its decoded value, read through a single device info set.
    pub fn properties(&self) -> Result<Vec<(DevicePropertyKey, DevicePropertyValue)>> {
        self.with_device_info(|device_info_set, device_info| {
            read_property_keys(device_info_set, device_info)?
                .into_iter()
                .map(|key| -> Result<(DevicePropertyKey, DevicePropertyValue)> {
                    Ok((key, read_property(device_info_set, device_info, &key)?))
                })
                .collect()
        })
    }

    fn string_property(&self, key: &DevicePropertyKey) -> Result<Option<String>> {
        Ok(self.try_property(key)?.and_then(DevicePropertyValue::into_string))
    }

    fn string_list_property(&self, key: &DevicePropertyKey) -> Result<Vec<String>> {
        Ok(self.try_property(key)?.and_then(DevicePropertyValue::into_string_list).unwrap_or_default())
    }

    pub fn description(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_DEVICE_DESC)
    }

    pub fn friendly_name(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_FRIENDLY_NAME)
    }

    /// Friendly name when set, otherwise the device description.
    pub fn display_name(&self) -> Result<Option<String>> {
        match self.friendly_name()? {
            Some(name) => Ok(Some(name)),
            None => self.description(),
        }
    }

    pub fn manufacturer(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_MANUFACTURER)
    }

    pub fn class_name(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_CLASS)
    }

    /// Name of the driver service bound to this device.
    pub fn service(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_SERVICE)
    }

    pub fn location(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_LOCATION_INFO)
    }

    pub fn enumerator_name(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_ENUMERATOR_NAME)
    }

    pub fn hardware_ids(&self) -> Result<Vec<String>> {
        self.string_list_property(&DEVPKEY_DEVICE_HARDWARE_IDS)
    }

    pub fn compatible_ids(&self) -> Result<Vec<String>> {
        self.string_list_property(&DEVPKEY_DEVICE_COMPATIBLE_IDS)
    }

    /// Name of the physical device object, e.g. `\Device\00000042`.
    pub fn physical_device_object_name(&self) -> Result<Option<String>> {
        self.string_property(&DEVPKEY_DEVICE_PDO_NAME)
    }

    /// Path that CreateFileW accepts for this device's physical device object (for I/O control requests).
    pub fn device_object_path(&self) -> Result<Option<String>> {
        Ok(self.physical_device_object_name()?.map(|name| format!("{GLOBALROOT_PREFIX}{name}")))
    }

    /// Opens this device's hardware or driver registry key; the key closes when the returned value drops.
    pub fn open_registry_key(&self, scope: RegistryKeyScope, hardware_profile: u32, key_type: RegistryKeyType, access: u32) -> Result<RegistryKey> {
        self.with_device_info(|device_info_set, device_info| {
            let handle = setupapi::open_dev_reg_key(
                device_info_set.handle(),
                &device_info.devinfo_data,
                scope as u32,
                hardware_profile,
                key_type as u32,
                access,
            )?;
            Ok(RegistryKey::from_handle(handle))
        })
    }

    /// Reads one value from the device's registry key (global scope, current profile).
    pub fn registry_value(&self, key_type: RegistryKeyType, value_name: &str) -> Result<DevicePropertyValue> {
        let registry_key = self.open_registry_key(RegistryKeyScope::Global, 0, key_type, KEY_READ)?;
        registry_key.query_value(value_name)
    }

    /// Children of this device according to `device_tree`.
    pub fn children_in(&self, device_tree: &DeviceTree) -> Result<Vec<Device>> {
        device_tree
            .children_of(&self.instance_id)
            .iter()
            .map(|child_instance_id| Device::from_instance_id(child_instance_id))
            .collect()
    }

    pub fn parent_in(&self, device_tree: &DeviceTree) -> Result<Option<Device>> {
        device_tree.parent_of(&self.instance_id).map(Device::from_instance_id).transpose()
    }

    /// Children from a fresh device tree snapshot; empty for leaf devices such as disk drives.
    pub fn children(&self) -> Result<Vec<Device>> {
        self.children_in(&DeviceManager::new().device_tree()?)
    }

    pub fn parent(&self) -> Result<Option<Device>> {
        self.parent_in(&DeviceManager::new().device_tree()?)
    }

    /// Asks the PnP manager to re-enumerate this device's subtree and waits for it to finish, so devices
    /// attached since the last enumeration (e.g. disks behind a storage controller) appear afterwards.
    pub fn rescan(&self) -> Result<()> {
        let dev_inst = cfgmgr32::locate_dev_node(Some(&native::to_wide(&self.instance_id)))?;
        cfgmgr32::reenumerate_dev_node(dev_inst, CM_REENUMERATE_SYNCHRONOUS)?;
        tracing::debug!(instance_id = %self.instance_id, "rescanned device");
        Ok(())
    }
}

pub(crate) fn read_property_keys(device_info_set: &DeviceInfoSet, device_info: &DeviceInfo) -> Result<Vec<DevicePropertyKey>> {
    let empty_key = DEVPROPKEY { fmtid: Guid::NIL.into(), pid: 0 };
    let keys = query_with_size_probe(empty_key, |keys| {
        let mut required_count: u32 = 0;
        let result = setupapi::get_device_property_keys(device_info_set.handle(), &device_info.devinfo_data, keys, &mut required_count);
        classify_sized_call(result, required_count, ERROR_INSUFFICIENT_BUFFER)
    })?;
    Ok(keys.into_iter().map(DevicePropertyKey::from).collect())
}

pub(crate) fn read_property(device_info_set: &DeviceInfoSet, device_info: &DeviceInfo, key: &DevicePropertyKey) -> Result<DevicePropertyValue> {
    let devpropkey = key.to_devpropkey();
    let mut property_type: u32 = 0;
    let buffer = query_with_size_probe(0u8, |buffer| {
        let mut required_size: u32 = 0;
        let result = setupapi::get_device_property(device_info_set.handle(), &device_info.devinfo_data, &devpropkey, &mut property_type, buffer, &mut required_size);
        match result {
            Err(error) if error.code == ERROR_NOT_FOUND => Err(Error::PropertyNotFound(*key)),
            result => classify_sized_call(result, required_size, ERROR_INSUFFICIENT_BUFFER),
        }
    })?;
    DevicePropertyValue::from_property_buffer(&buffer, property_type)
}
