// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::ops::BitOr;

/// DIGCF_* flags for SetupDiGetClassDevsW.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceInfoSetFlags(pub u32);

impl DeviceInfoSetFlags {
    pub const DEFAULT: Self = Self(0x0000_0001);
    pub const PRESENT: Self = Self(0x0000_0002);
    pub const ALL_CLASSES: Self = Self(0x0000_0004);
    pub const PROFILE: Self = Self(0x0000_0008);
    pub const DEVICE_INTERFACE: Self = Self(0x0000_0010);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for DeviceInfoSetFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Default for DeviceInfoSetFlags {
    fn default() -> Self {
        Self::PRESENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_flags() {
        let flags = DeviceInfoSetFlags::PRESENT | DeviceInfoSetFlags::ALL_CLASSES;
        assert_eq!(flags.0, 0x6);
        assert!(flags.contains(DeviceInfoSetFlags::PRESENT));
        assert!(!flags.contains(DeviceInfoSetFlags::DEVICE_INTERFACE));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn flags_match_platform_headers() {
        use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{
            DIGCF_ALLCLASSES, DIGCF_DEFAULT, DIGCF_DEVICEINTERFACE, DIGCF_PRESENT, DIGCF_PROFILE,
        };

        assert_eq!(DeviceInfoSetFlags::DEFAULT.0, DIGCF_DEFAULT);
        assert_eq!(DeviceInfoSetFlags::PRESENT.0, DIGCF_PRESENT);
        assert_eq!(DeviceInfoSetFlags::ALL_CLASSES.0, DIGCF_ALLCLASSES);
        assert_eq!(DeviceInfoSetFlags::PROFILE.0, DIGCF_PROFILE);
        assert_eq!(DeviceInfoSetFlags::DEVICE_INTERFACE.0, DIGCF_DEVICEINTERFACE);
    }
}
