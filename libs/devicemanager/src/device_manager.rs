// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::device::read_property;
use crate::device_property_key::DEVPKEY_DEVICE_PARENT;
use crate::native::cfgmgr32;
use crate::{
    Device, DeviceClass, DeviceClassFilter, DeviceInfoSet, DeviceInfoSetFlags, DevicePropertyValue, DeviceTree, Error, Guid, RegistryKey,
    Result, DISK_DRIVES, KEY_READ, SCSI_DEVICES, STORAGE_CONTROLLERS, VOLUMES,
};
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::CM_REENUMERATE_SYNCHRONOUS;

const SERVICES_KEY_PATH: &str = "SYSTEM\\CurrentControlSet\\Services";

/// Entry point for enumerating the devices present on this machine.
///
/// Every accessor opens a fresh device info set, collects the devices eagerly and closes the set before
/// returning; nothing is cached between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceManager;

impl DeviceManager {
    pub fn new() -> Self {
        Self
    }

    fn collect_devices(&self, class_guid: Option<&Guid>, enumerator: Option<&str>) -> Result<Vec<Device>> {
        let device_info_set = DeviceInfoSet::open(class_guid, enumerator, DeviceInfoSetFlags::PRESENT)?;
        let devices = device_info_set
            .iter()
            .map(|device_info| Device::from_device_info(&device_info_set, &device_info?))
            .collect::<Result<Vec<_>>>()?;
        device_info_set.close()?;
        tracing::debug!(count = devices.len(), ?enumerator, "enumerated devices");
        Ok(devices)
    }

    pub fn all_devices(&self) -> Result<Vec<Device>> {
        self.collect_devices(None, None)
    }

    /// Devices of one class; the OS applies the filter while building the set.
    pub fn devices_of_class(&self, device_class: &DeviceClass) -> Result<Vec<Device>> {
        tracing::trace!(class = device_class.name, "enumerating device class");
        match device_class.filter {
            DeviceClassFilter::SetupClass(class_guid) => self.collect_devices(Some(&class_guid), None),
            DeviceClassFilter::Enumerator(enumerator) => self.collect_devices(None, Some(enumerator)),
        }
    }

    pub fn storage_controllers(&self) -> Result<Vec<Device>> {
        self.devices_of_class(&STORAGE_CONTROLLERS)
    }

    pub fn disk_drives(&self) -> Result<Vec<Device>> {
        self.devices_of_class(&DISK_DRIVES)
    }

    pub fn scsi_devices(&self) -> Result<Vec<Device>> {
        self.devices_of_class(&SCSI_DEVICES)
    }

    pub fn volumes(&self) -> Result<Vec<Device>> {
        self.devices_of_class(&VOLUMES)
    }

    pub fn device(&self, instance_id: &str) -> Result<Device> {
        Device::from_instance_id(instance_id)
    }

    /// Parent/child index over all present devices, built in one pass from each device's parent relation.
    pub fn device_tree(&self) -> Result<DeviceTree> {
        let device_info_set = DeviceInfoSet::open(None, None, DeviceInfoSetFlags::PRESENT)?;
        let mut device_tree = DeviceTree::default();
        for device_info in device_info_set.iter() {
            let device_info = device_info?;
            let instance_id = device_info_set.instance_id(&device_info)?;
            match read_property(&device_info_set, &device_info, &DEVPKEY_DEVICE_PARENT) {
                Ok(DevicePropertyValue::String(parent_instance_id)) => device_tree.insert(&parent_instance_id, &instance_id),
                Ok(_) => {},
                // the root devnode has no parent
                Err(Error::PropertyNotFound(_)) => {},
                Err(error) => return Err(error),
            }
        }
        device_info_set.close()?;
        tracing::debug!(relations = device_tree.len(), "built device tree");
        Ok(device_tree)
    }

    /// Instance IDs a driver service currently manages, read from
    /// `HKLM\SYSTEM\CurrentControlSet\Services\<service>\Enum` (`Count` followed by values `0`..`Count-1`).
    pub fn service_instance_ids(&self, service: &str) -> Result<Vec<String>> {
        let registry_key = RegistryKey::open_local_machine(&format!("{SERVICES_KEY_PATH}\\{service}\\Enum"), KEY_READ)?;
        let count = registry_key.query_value("Count")?.as_u32().unwrap_or(0);
        let mut instance_ids = Vec::with_capacity(count as usize);
        for index in 0..count {
            if let Some(instance_id) = registry_key.query_value(&index.to_string())?.into_string() {
                instance_ids.push(instance_id);
            }
        }
        Ok(instance_ids)
    }

    /// Present devices managed by a driver service (e.g. `disk`).
    pub fn service_devices(&self, service: &str) -> Result<Vec<Device>> {
        self.service_instance_ids(service)?
            .iter()
            .map(|instance_id| Device::from_instance_id(instance_id))
            .collect()
    }

    pub fn rescan_device(&self, instance_id: &str) -> Result<()> {
        self.device(instance_id)?.rescan()
    }

    /// Re-enumerates the whole device tree from its root.
    pub fn rescan_all(&self) -> Result<()> {
        let root = cfgmgr32::locate_dev_node(None)?;
        cfgmgr32::reenumerate_dev_node(root, CM_REENUMERATE_SYNCHRONOUS)?;
        tracing::debug!("rescanned device tree root");
        Ok(())
    }
}
