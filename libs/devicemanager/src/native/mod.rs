// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

// Typed wrappers around the setupapi, advapi32 and cfgmgr32 entry points. Every wrapper applies exactly one
// result check (invalid handle, zero BOOL, or non-success status) and reports failure as a NativeCallError;
// nothing here retries.

pub(crate) mod advapi32;
pub(crate) mod cfgmgr32;
pub(crate) mod setupapi;

use crate::NativeCallError;
use std::ffi::c_void;
use windows_sys::Win32::Foundation::{GetLastError, ERROR_SUCCESS, INVALID_HANDLE_VALUE};

pub(crate) fn last_error(function: &'static str) -> NativeCallError {
    let code = unsafe { GetLastError() };
    NativeCallError::new(function, code)
}

/// Failure when the returned handle is INVALID_HANDLE_VALUE; the code comes from GetLastError.
pub(crate) fn check_invalid_handle(function: &'static str, handle: *mut c_void) -> Result<*mut c_void, NativeCallError> {
    if handle as isize == INVALID_HANDLE_VALUE as isize {
        return Err(last_error(function));
    }
    Ok(handle)
}

/// Failure when the returned BOOL is zero; the code comes from GetLastError.
pub(crate) fn check_bool(function: &'static str, result: i32) -> Result<(), NativeCallError> {
    if result == 0 {
        return Err(last_error(function));
    }
    Ok(())
}

/// Failure when the returned status is not ERROR_SUCCESS; the status itself is the code.
pub(crate) fn check_status(function: &'static str, status: u32) -> Result<(), NativeCallError> {
    if status != ERROR_SUCCESS {
        return Err(NativeCallError::new(function, status));
    }
    Ok(())
}

/// Null-terminated UTF-16 copy of `value`, for PCWSTR parameters.
pub(crate) fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}
