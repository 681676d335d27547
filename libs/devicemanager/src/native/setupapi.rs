// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use super::{check_bool, check_invalid_handle};
use crate::size_probe::buffer_ptr;
use crate::NativeCallError;
use windows_sys::{
    core::GUID,
    Win32::Devices::DeviceAndDriverInstallation::{
        HDEVINFO,
        SP_DEVINFO_DATA,
        SetupDiCreateDeviceInfoList,
        SetupDiDestroyDeviceInfoList,
        SetupDiEnumDeviceInfo,
        SetupDiGetClassDevsW,
        SetupDiGetDeviceInstanceIdW,
        SetupDiGetDevicePropertyKeys,
        SetupDiGetDevicePropertyW,
        SetupDiOpenDevRegKey,
        SetupDiOpenDeviceInfoW,
    },
    Win32::Devices::Properties::DEVPROPKEY,
    Win32::System::Registry::HKEY,
};

pub(crate) fn new_devinfo_data() -> SP_DEVINFO_DATA {
    SP_DEVINFO_DATA {
        cbSize: std::mem::size_of::<SP_DEVINFO_DATA>() as u32,
        ClassGuid: GUID::from_u128(0),
        DevInst: 0,
        Reserved: 0,
    }
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetclassdevsw
pub(crate) fn get_class_devs(class_guid: Option<&GUID>, enumerator: Option<&[u16]>, flags: u32) -> Result<HDEVINFO, NativeCallError> {
    let class_guid_ptr = class_guid.map_or(std::ptr::null(), |guid| guid as *const GUID);
    let enumerator_ptr = enumerator.map_or(std::ptr::null(), |chars| chars.as_ptr());
    let handle = unsafe { SetupDiGetClassDevsW(class_guid_ptr, enumerator_ptr, std::ptr::null_mut(), flags) };
    check_invalid_handle("SetupDiGetClassDevsW", handle)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdicreatedeviceinfolist
pub(crate) fn create_device_info_list() -> Result<HDEVINFO, NativeCallError> {
    let handle = unsafe { SetupDiCreateDeviceInfoList(std::ptr::null(), std::ptr::null_mut()) };
    check_invalid_handle("SetupDiCreateDeviceInfoList", handle)
}

pub(crate) fn destroy_device_info_list(device_info_set: HDEVINFO) -> Result<(), NativeCallError> {
    let result = unsafe { SetupDiDestroyDeviceInfoList(device_info_set) };
    check_bool("SetupDiDestroyDeviceInfoList", result)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdienumdeviceinfo
pub(crate) fn enum_device_info(device_info_set: HDEVINFO, member_index: u32, devinfo_data: &mut SP_DEVINFO_DATA) -> Result<(), NativeCallError> {
    let result = unsafe { SetupDiEnumDeviceInfo(device_info_set, member_index, devinfo_data) };
    check_bool("SetupDiEnumDeviceInfo", result)
}

// NOTE: instance_id must be null-terminated
pub(crate) fn open_device_info(device_info_set: HDEVINFO, instance_id: &[u16], devinfo_data: &mut SP_DEVINFO_DATA) -> Result<(), NativeCallError> {
    let result = unsafe { SetupDiOpenDeviceInfoW(device_info_set, instance_id.as_ptr(), std::ptr::null_mut(), 0, devinfo_data) };
    check_bool("SetupDiOpenDeviceInfoW", result)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetdeviceinstanceidw
pub(crate) fn get_device_instance_id(device_info_set: HDEVINFO, devinfo_data: &SP_DEVINFO_DATA, buffer: &mut [u16], required_size: &mut u32) -> Result<(), NativeCallError> {
    let result = unsafe { SetupDiGetDeviceInstanceIdW(device_info_set, devinfo_data, buffer_ptr(buffer), buffer.len() as u32, required_size) };
    check_bool("SetupDiGetDeviceInstanceIdW", result)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetdevicepropertykeys
pub(crate) fn get_device_property_keys(device_info_set: HDEVINFO, devinfo_data: &SP_DEVINFO_DATA, keys: &mut [DEVPROPKEY], required_count: &mut u32) -> Result<(), NativeCallError> {
    let result = unsafe { SetupDiGetDevicePropertyKeys(device_info_set, devinfo_data, buffer_ptr(keys), keys.len() as u32, required_count, 0) };
    check_bool("SetupDiGetDevicePropertyKeys", result)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetdevicepropertyw
pub(crate) fn get_device_property(
    device_info_set: HDEVINFO,
    devinfo_data: &SP_DEVINFO_DATA,
    property_key: &DEVPROPKEY,
    property_type: &mut u32,
    buffer: &mut [u8],
    required_size: &mut u32,
) -> Result<(), NativeCallError> {
    let result = unsafe {
        SetupDiGetDevicePropertyW(device_info_set, devinfo_data, property_key, property_type, buffer_ptr(buffer), buffer.len() as u32, required_size, 0)
    };
    check_bool("SetupDiGetDevicePropertyW", result)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdiopendevregkey
pub(crate) fn open_dev_reg_key(
    device_info_set: HDEVINFO,
    devinfo_data: &SP_DEVINFO_DATA,
    scope: u32,
    hardware_profile: u32,
    key_type: u32,
    access: u32,
) -> Result<HKEY, NativeCallError> {
    let key = unsafe { SetupDiOpenDevRegKey(device_info_set, devinfo_data, scope, hardware_profile, key_type, access) };
    check_invalid_handle("SetupDiOpenDevRegKey", key)
}
