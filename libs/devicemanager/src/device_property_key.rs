// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::Guid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DevicePropertyKey {
    pub fmtid: Guid,
    pub pid: u32,
}
impl DevicePropertyKey {
    pub const fn new(fmtid: u128, pid: u32) -> Self {
        Self { fmtid: Guid::from_u128(fmtid), pid }
    }

    /// Symbolic name (e.g. `DEVPKEY_Device_FriendlyName`) for keys in the well-known table.
    pub fn name(&self) -> Option<&'static str> {
        WELL_KNOWN_PROPERTY_KEYS.iter().find(|(_, key)| key == self).map(|(name, _)| *name)
    }

    #[cfg(target_os = "windows")]
    pub fn to_devpropkey(&self) -> windows_sys::Win32::Devices::Properties::DEVPROPKEY {
        windows_sys::Win32::Devices::Properties::DEVPROPKEY { fmtid: self.fmtid.into(), pid: self.pid }
    }
}

#[cfg(target_os = "windows")]
impl From<windows_sys::Win32::Devices::Properties::DEVPROPKEY> for DevicePropertyKey {
    fn from(item: windows_sys::Win32::Devices::Properties::DEVPROPKEY) -> Self {
        Self { fmtid: item.fmtid.into(), pid: item.pid }
    }
}

// NOTE: this is the PROPERTYKEY string form used by the property system, e.g. "{a45c254e-df1c-4efd-8020-67d146a850e0} 14"
impl std::fmt::Display for DevicePropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.fmtid.to_braced_string(), self.pid)
    }
}

const DEVPKEY_DEVICE_BASE: u128 = 0xa45c254e_df1c_4efd_8020_67d146a850e0;
const DEVPKEY_DEVICE_RELATIONS: u128 = 0x4340a6c5_93fa_4706_972c_7b648008a5a7;

pub const DEVPKEY_NAME: DevicePropertyKey = DevicePropertyKey::new(0xb725f130_47ef_101a_a5f1_02608c9eebac, 10);
pub const DEVPKEY_DEVICE_DEVICE_DESC: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 2);
pub const DEVPKEY_DEVICE_HARDWARE_IDS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 3);
pub const DEVPKEY_DEVICE_COMPATIBLE_IDS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 4);
pub const DEVPKEY_DEVICE_SERVICE: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 6);
pub const DEVPKEY_DEVICE_CLASS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 9);
pub const DEVPKEY_DEVICE_CLASS_GUID: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 10);
pub const DEVPKEY_DEVICE_DRIVER: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 11);
pub const DEVPKEY_DEVICE_MANUFACTURER: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 13);
pub const DEVPKEY_DEVICE_FRIENDLY_NAME: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 14);
pub const DEVPKEY_DEVICE_LOCATION_INFO: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 15);
pub const DEVPKEY_DEVICE_PDO_NAME: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 16);
pub const DEVPKEY_DEVICE_CAPABILITIES: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 17);
pub const DEVPKEY_DEVICE_UI_NUMBER: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 18);
pub const DEVPKEY_DEVICE_BUS_NUMBER: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 23);
pub const DEVPKEY_DEVICE_ENUMERATOR_NAME: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 24);
pub const DEVPKEY_DEVICE_ADDRESS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 30);
pub const DEVPKEY_DEVICE_LOCATION_PATHS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 37);
pub const DEVPKEY_DEVICE_BASE_CONTAINER_ID: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 38);
pub const DEVPKEY_DEVICE_DEV_NODE_STATUS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_RELATIONS, 2);
pub const DEVPKEY_DEVICE_PROBLEM_CODE: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_RELATIONS, 3);
pub const DEVPKEY_DEVICE_PARENT: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_RELATIONS, 8);
pub const DEVPKEY_DEVICE_CHILDREN: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_RELATIONS, 9);
pub const DEVPKEY_DEVICE_SIBLINGS: DevicePropertyKey = DevicePropertyKey::new(DEVPKEY_DEVICE_RELATIONS, 10);
pub const DEVPKEY_DEVICE_CONTAINER_ID: DevicePropertyKey = DevicePropertyKey::new(0x8c7ed206_3f8a_4827_b3ab_ae9e1faefc6c, 2);
pub const DEVPKEY_DEVICE_DRIVER_VERSION: DevicePropertyKey = DevicePropertyKey::new(0xa8b865dd_2e3d_4094_ad97_e593a70c75d6, 3);
pub const DEVPKEY_DEVICE_INSTANCE_ID: DevicePropertyKey = DevicePropertyKey::new(0x78c34fc8_104a_4aca_9ea4_524d52996e57, 256);

pub static WELL_KNOWN_PROPERTY_KEYS: &[(&str, DevicePropertyKey)] = &[
    ("DEVPKEY_NAME", DEVPKEY_NAME),
    ("DEVPKEY_Device_DeviceDesc", DEVPKEY_DEVICE_DEVICE_DESC),
    ("DEVPKEY_Device_HardwareIds", DEVPKEY_DEVICE_HARDWARE_IDS),
    ("DEVPKEY_Device_CompatibleIds", DEVPKEY_DEVICE_COMPATIBLE_IDS),
    ("DEVPKEY_Device_Service", DEVPKEY_DEVICE_SERVICE),
    ("DEVPKEY_Device_Class", DEVPKEY_DEVICE_CLASS),
    ("DEVPKEY_Device_ClassGuid", DEVPKEY_DEVICE_CLASS_GUID),
    ("DEVPKEY_Device_Driver", DEVPKEY_DEVICE_DRIVER),
    ("DEVPKEY_Device_Manufacturer", DEVPKEY_DEVICE_MANUFACTURER),
    ("DEVPKEY_Device_FriendlyName", DEVPKEY_DEVICE_FRIENDLY_NAME),
    ("DEVPKEY_Device_LocationInfo", DEVPKEY_DEVICE_LOCATION_INFO),
    ("DEVPKEY_Device_PDOName", DEVPKEY_DEVICE_PDO_NAME),
    ("DEVPKEY_Device_Capabilities", DEVPKEY_DEVICE_CAPABILITIES),
    ("DEVPKEY_Device_UINumber", DEVPKEY_DEVICE_UI_NUMBER),
    ("DEVPKEY_Device_BusNumber", DEVPKEY_DEVICE_BUS_NUMBER),
    ("DEVPKEY_Device_EnumeratorName", DEVPKEY_DEVICE_ENUMERATOR_NAME),
    ("DEVPKEY_Device_Address", DEVPKEY_DEVICE_ADDRESS),
    ("DEVPKEY_Device_LocationPaths", DEVPKEY_DEVICE_LOCATION_PATHS),
    ("DEVPKEY_Device_BaseContainerId", DEVPKEY_DEVICE_BASE_CONTAINER_ID),
    ("DEVPKEY_Device_DevNodeStatus", DEVPKEY_DEVICE_DEV_NODE_STATUS),
    ("DEVPKEY_Device_ProblemCode", DEVPKEY_DEVICE_PROBLEM_CODE),
    ("DEVPKEY_Device_Parent", DEVPKEY_DEVICE_PARENT),
    ("DEVPKEY_Device_Children", DEVPKEY_DEVICE_CHILDREN),
    ("DEVPKEY_Device_Siblings", DEVPKEY_DEVICE_SIBLINGS),
    ("DEVPKEY_Device_ContainerId", DEVPKEY_DEVICE_CONTAINER_ID),
    ("DEVPKEY_Device_DriverVersion", DEVPKEY_DEVICE_DRIVER_VERSION),
    ("DEVPKEY_Device_InstanceId", DEVPKEY_DEVICE_INSTANCE_ID),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_property_key_string() {
        assert_eq!(DEVPKEY_DEVICE_FRIENDLY_NAME.to_string(), "{a45c254e-df1c-4efd-8020-67d146a850e0} 14");
    }

    #[test]
    fn resolves_well_known_names() {
        assert_eq!(DEVPKEY_DEVICE_PARENT.name(), Some("DEVPKEY_Device_Parent"));
        assert_eq!(DevicePropertyKey::new(DEVPKEY_DEVICE_BASE, 9999).name(), None);
    }

    #[test]
    fn well_known_keys_are_distinct() {
        let mut keys: Vec<_> = WELL_KNOWN_PROPERTY_KEYS.iter().map(|(_, key)| *key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), WELL_KNOWN_PROPERTY_KEYS.len());
    }
}
