// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use super::check_status;
use crate::size_probe::buffer_ptr;
use crate::NativeCallError;
use windows_sys::Win32::System::Registry::{HKEY, RegCloseKey, RegOpenKeyExW, RegQueryValueExW};

// NOTE: subkey must be null-terminated
pub(crate) fn reg_open_key(parent: HKEY, subkey: &[u16], access: u32) -> Result<HKEY, NativeCallError> {
    let mut key: HKEY = std::ptr::null_mut();
    let status = unsafe { RegOpenKeyExW(parent, subkey.as_ptr(), 0, access, &mut key) };
    check_status("RegOpenKeyExW", status)?;
    Ok(key)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/winreg/nf-winreg-regqueryvalueexw
// NOTE: value_name must be null-terminated; on input `size` is ignored and replaced by the buffer length
pub(crate) fn reg_query_value(key: HKEY, value_name: &[u16], value_type: &mut u32, buffer: &mut [u8], size: &mut u32) -> Result<(), NativeCallError> {
    *size = buffer.len() as u32;
    let status = unsafe { RegQueryValueExW(key, value_name.as_ptr(), std::ptr::null(), value_type, buffer_ptr(buffer), size) };
    check_status("RegQueryValueExW", status)
}

pub(crate) fn reg_close_key(key: HKEY) -> Result<(), NativeCallError> {
    let status = unsafe { RegCloseKey(key) };
    check_status("RegCloseKey", status)
}
