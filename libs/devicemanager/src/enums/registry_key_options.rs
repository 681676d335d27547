// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

/// DICS_FLAG_* scope for SetupDiOpenDevRegKey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryKeyScope {
    Global = 0x0000_0001,
    ConfigSpecific = 0x0000_0002,
}

/// DIREG_* key type for SetupDiOpenDevRegKey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryKeyType {
    /// Hardware key (`Enum\<instance id>\Device Parameters`).
    Device = 0x0000_0001,
    /// Software (driver) key under the class key.
    Driver = 0x0000_0002,
}

/// KEY_READ access mask.
pub const KEY_READ: u32 = 0x0002_0019;

#[cfg(all(test, target_os = "windows"))]
mod tests {
    use super::*;
    use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{DICS_FLAG_CONFIGSPECIFIC, DICS_FLAG_GLOBAL, DIREG_DEV, DIREG_DRV};

    #[test]
    fn options_match_platform_headers() {
        assert_eq!(RegistryKeyScope::Global as u32, DICS_FLAG_GLOBAL);
        assert_eq!(RegistryKeyScope::ConfigSpecific as u32, DICS_FLAG_CONFIGSPECIFIC);
        assert_eq!(RegistryKeyType::Device as u32, DIREG_DEV);
        assert_eq!(RegistryKeyType::Driver as u32, DIREG_DRV);
        assert_eq!(KEY_READ, windows_sys::Win32::System::Registry::KEY_READ);
    }
}
