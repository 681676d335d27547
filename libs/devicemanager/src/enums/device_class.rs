// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::Guid;

/// How the OS narrows an enumeration down to one class of devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClassFilter {
    /// Devices installed under this setup class GUID.
    SetupClass(Guid),
    /// Devices created by this PnP enumerator (bus driver), e.g. `SCSI`.
    Enumerator(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceClass {
    pub name: &'static str,
    pub filter: DeviceClassFilter,
}

pub const GUID_DEVCLASS_DISKDRIVE: Guid = Guid::from_u128(0x4d36e967_e325_11ce_bfc1_08002be10318);
pub const GUID_DEVCLASS_HDC: Guid = Guid::from_u128(0x4d36e96a_e325_11ce_bfc1_08002be10318);
pub const GUID_DEVCLASS_SCSIADAPTER: Guid = Guid::from_u128(0x4d36e97b_e325_11ce_bfc1_08002be10318);
pub const GUID_DEVCLASS_VOLUME: Guid = Guid::from_u128(0x71a27cdd_812a_11d0_bec7_08002be2092f);

// NOTE: "Storage controllers" is the Device Manager display name of the SCSIAdapter setup class
pub const STORAGE_CONTROLLERS: DeviceClass = DeviceClass { name: "storage controllers", filter: DeviceClassFilter::SetupClass(GUID_DEVCLASS_SCSIADAPTER) };
pub const DISK_DRIVES: DeviceClass = DeviceClass { name: "disk drives", filter: DeviceClassFilter::SetupClass(GUID_DEVCLASS_DISKDRIVE) };
pub const IDE_CONTROLLERS: DeviceClass = DeviceClass { name: "ide ata/atapi controllers", filter: DeviceClassFilter::SetupClass(GUID_DEVCLASS_HDC) };
pub const VOLUMES: DeviceClass = DeviceClass { name: "volumes", filter: DeviceClassFilter::SetupClass(GUID_DEVCLASS_VOLUME) };
pub const SCSI_DEVICES: DeviceClass = DeviceClass { name: "scsi devices", filter: DeviceClassFilter::Enumerator("SCSI") };

pub static WELL_KNOWN_DEVICE_CLASSES: &[DeviceClass] = &[STORAGE_CONTROLLERS, DISK_DRIVES, IDE_CONTROLLERS, VOLUMES, SCSI_DEVICES];

impl DeviceClass {
    /// Looks up a well-known class by name, ignoring case.
    pub fn by_name(name: &str) -> Option<DeviceClass> {
        WELL_KNOWN_DEVICE_CLASSES.iter().find(|class| class.name.eq_ignore_ascii_case(name)).copied()
    }

    /// Looks up a well-known class by its setup class GUID.
    pub fn by_setup_class_guid(guid: &Guid) -> Option<DeviceClass> {
        WELL_KNOWN_DEVICE_CLASSES
            .iter()
            .find(|class| matches!(class.filter, DeviceClassFilter::SetupClass(class_guid) if class_guid == *guid))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_by_name_case_insensitively() {
        assert_eq!(DeviceClass::by_name("Disk Drives"), Some(DISK_DRIVES));
        assert_eq!(DeviceClass::by_name("SCSI devices"), Some(SCSI_DEVICES));
        assert_eq!(DeviceClass::by_name("printers"), None);
    }

    #[test]
    fn looks_up_by_setup_class_guid() {
        let guid: Guid = "{4D36E97B-E325-11CE-BFC1-08002BE10318}".parse().unwrap();
        assert_eq!(DeviceClass::by_setup_class_guid(&guid), Some(STORAGE_CONTROLLERS));
        assert_eq!(DeviceClass::by_setup_class_guid(&Guid::NIL), None);
    }

    #[test]
    fn names_are_unique() {
        for (index, class) in WELL_KNOWN_DEVICE_CLASSES.iter().enumerate() {
            assert!(WELL_KNOWN_DEVICE_CLASSES[index + 1..].iter().all(|other| other.name != class.name));
        }
    }
}
