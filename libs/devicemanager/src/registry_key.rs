// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::native::{self, advapi32};
use crate::owned_handle::OwnedHandle;
use crate::size_probe::{classify_sized_call, query_with_size_probe, SizedQuery};
use crate::{DevicePropertyValue, Result};
use windows_sys::Win32::Foundation::ERROR_MORE_DATA;
use windows_sys::Win32::System::Registry::{HKEY, HKEY_LOCAL_MACHINE};

/// An open registry key, closed when dropped.
pub struct RegistryKey {
    handle: OwnedHandle<HKEY>,
}

impl RegistryKey {
    /// Takes ownership of a key handle returned by a successful open call.
    pub(crate) fn from_handle(handle: HKEY) -> Self {
        Self { handle: OwnedHandle::new(handle, advapi32::reg_close_key, "registry key") }
    }

    /// Opens `HKEY_LOCAL_MACHINE\<path>` with the given access mask.
    pub fn open_local_machine(path: &str, access: u32) -> Result<Self> {
        let handle = advapi32::reg_open_key(HKEY_LOCAL_MACHINE, &native::to_wide(path), access)?;
        Ok(Self::from_handle(handle))
    }

    /// Reads and decodes one value; a missing value is reported as ERROR_FILE_NOT_FOUND.
    pub fn query_value(&self, value_name: &str) -> Result<DevicePropertyValue> {
        let value_name_as_utf16_chars = native::to_wide(value_name);
        let mut value_type: u32 = 0;
        let buffer = query_with_size_probe(0u8, |buffer| {
            let mut size: u32 = 0;
            let result = advapi32::reg_query_value(self.handle.get(), &value_name_as_utf16_chars, &mut value_type, buffer, &mut size);
            // NOTE: with a null data pointer the call succeeds and only reports the size
            if result.is_ok() && buffer.is_empty() && size > 0 {
                return Ok(SizedQuery::BufferTooSmall(size as usize));
            }
            classify_sized_call(result, size, ERROR_MORE_DATA)
        })?;
        DevicePropertyValue::from_registry_buffer(&buffer, value_type)
    }

    /// Closes the key now, reporting failure instead of logging it.
    pub fn close(self) -> Result<()> {
        self.handle.close()
    }
}
