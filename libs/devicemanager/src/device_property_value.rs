// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{DevicePropertyKey, Error, Guid, Result};

// DEVPROPTYPE values (devpropdef.h); the base type lives in the low 12 bits and the modifier in the next 4
pub const DEVPROP_TYPE_EMPTY: u32 = 0x0000_0000;
pub const DEVPROP_TYPE_NULL: u32 = 0x0000_0001;
pub const DEVPROP_TYPE_SBYTE: u32 = 0x0000_0002;
pub const DEVPROP_TYPE_BYTE: u32 = 0x0000_0003;
pub const DEVPROP_TYPE_INT16: u32 = 0x0000_0004;
pub const DEVPROP_TYPE_UINT16: u32 = 0x0000_0005;
pub const DEVPROP_TYPE_INT32: u32 = 0x0000_0006;
pub const DEVPROP_TYPE_UINT32: u32 = 0x0000_0007;
pub const DEVPROP_TYPE_INT64: u32 = 0x0000_0008;
pub const DEVPROP_TYPE_UINT64: u32 = 0x0000_0009;
pub const DEVPROP_TYPE_FLOAT: u32 = 0x0000_000A;
pub const DEVPROP_TYPE_DOUBLE: u32 = 0x0000_000B;
pub const DEVPROP_TYPE_GUID: u32 = 0x0000_000D;
pub const DEVPROP_TYPE_FILETIME: u32 = 0x0000_0010;
pub const DEVPROP_TYPE_BOOLEAN: u32 = 0x0000_0011;
pub const DEVPROP_TYPE_STRING: u32 = 0x0000_0012;
pub const DEVPROP_TYPE_SECURITY_DESCRIPTOR: u32 = 0x0000_0013;
pub const DEVPROP_TYPE_SECURITY_DESCRIPTOR_STRING: u32 = 0x0000_0014;
pub const DEVPROP_TYPE_DEVPROPKEY: u32 = 0x0000_0015;
pub const DEVPROP_TYPE_DEVPROPTYPE: u32 = 0x0000_0016;
pub const DEVPROP_TYPE_ERROR: u32 = 0x0000_0017;
pub const DEVPROP_TYPE_NTSTATUS: u32 = 0x0000_0018;
pub const DEVPROP_TYPE_STRING_INDIRECT: u32 = 0x0000_0019;
pub const DEVPROP_TYPEMOD_ARRAY: u32 = 0x0000_1000;
pub const DEVPROP_TYPEMOD_LIST: u32 = 0x0000_2000;
pub const DEVPROP_TYPE_BINARY: u32 = DEVPROP_TYPE_BYTE | DEVPROP_TYPEMOD_ARRAY;
pub const DEVPROP_TYPE_STRING_LIST: u32 = DEVPROP_TYPE_STRING | DEVPROP_TYPEMOD_LIST;
const DEVPROP_MASK_TYPE: u32 = 0x0000_0FFF;
const DEVPROP_MASK_TYPEMOD: u32 = 0x0000_F000;

// registry value types (winnt.h)
pub const REG_NONE: u32 = 0;
pub const REG_SZ: u32 = 1;
pub const REG_EXPAND_SZ: u32 = 2;
pub const REG_BINARY: u32 = 3;
pub const REG_DWORD: u32 = 4;
pub const REG_DWORD_BIG_ENDIAN: u32 = 5;
pub const REG_MULTI_SZ: u32 = 7;
pub const REG_QWORD: u32 = 11;

/// A decoded device property or registry value.
#[derive(Clone, Debug, PartialEq)]
pub enum DevicePropertyValue {
    Empty,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    /// 100-nanosecond intervals since 1601-01-01 (UTC).
    FileTime(u64),
    Guid(Guid),
    PropertyKey(DevicePropertyKey),
    String(String),
    StringList(Vec<String>),
    Binary(Vec<u8>),
    Array(Vec<DevicePropertyValue>),
    /// Type tag this crate does not decode; the bytes are passed through unchanged.
    Unsupported { type_tag: u32, data: Vec<u8> },
}

impl DevicePropertyValue {
    /// Decodes a buffer returned by SetupDiGetDevicePropertyW according to its DEVPROPTYPE.
    pub fn from_property_buffer(buffer: &[u8], type_tag: u32) -> Result<Self> {
        let base_type = type_tag & DEVPROP_MASK_TYPE;
        match type_tag & DEVPROP_MASK_TYPEMOD {
            0 => {},
            DEVPROP_TYPEMOD_ARRAY => {
                if base_type == DEVPROP_TYPE_BYTE {
                    return Ok(DevicePropertyValue::Binary(buffer.to_vec()));
                }
                let Some(element_size) = fixed_size_of(base_type) else {
                    // arrays are only defined for fixed-size element types
                    return Ok(DevicePropertyValue::Unsupported { type_tag, data: buffer.to_vec() });
                };
                if buffer.len() % element_size != 0 {
                    return Err(Error::InvalidPropertyData { type_tag, reason: "array length is not a multiple of the element size" });
                }
                let elements = buffer
                    .chunks(element_size)
                    .map(|chunk| decode_fixed_size(chunk, base_type))
                    .collect::<Result<Vec<_>>>()?;
                return Ok(DevicePropertyValue::Array(elements));
            },
            DEVPROP_TYPEMOD_LIST => {
                return match base_type {
                    DEVPROP_TYPE_STRING | DEVPROP_TYPE_SECURITY_DESCRIPTOR_STRING | DEVPROP_TYPE_STRING_INDIRECT => {
                        Ok(DevicePropertyValue::StringList(decode_multi_string(buffer, type_tag, true)?))
                    },
                    _ => Ok(DevicePropertyValue::Unsupported { type_tag, data: buffer.to_vec() }),
                };
            },
            _ => return Ok(DevicePropertyValue::Unsupported { type_tag, data: buffer.to_vec() }),
        }

        match base_type {
            DEVPROP_TYPE_EMPTY | DEVPROP_TYPE_NULL => Ok(DevicePropertyValue::Empty),
            DEVPROP_TYPE_STRING | DEVPROP_TYPE_SECURITY_DESCRIPTOR_STRING | DEVPROP_TYPE_STRING_INDIRECT => {
                Ok(DevicePropertyValue::String(decode_string(buffer, type_tag, true)?))
            },
            DEVPROP_TYPE_SECURITY_DESCRIPTOR => Ok(DevicePropertyValue::Binary(buffer.to_vec())),
            _ if fixed_size_of(base_type).is_some() => decode_fixed_size(buffer, base_type),
            _ => Ok(DevicePropertyValue::Unsupported { type_tag, data: buffer.to_vec() }),
        }
    }

    /// Decodes a buffer returned by RegQueryValueExW according to its REG_* value type.
    pub fn from_registry_buffer(buffer: &[u8], value_type: u32) -> Result<Self> {
        match value_type {
            // NOTE: registry strings and string lists are not guaranteed to be null-terminated
            REG_SZ | REG_EXPAND_SZ => Ok(DevicePropertyValue::String(decode_string(buffer, value_type, false)?)),
            REG_MULTI_SZ => Ok(DevicePropertyValue::StringList(decode_multi_string(buffer, value_type, false)?)),
            REG_DWORD => Ok(DevicePropertyValue::UInt32(u32::from_le_bytes(fixed_bytes(buffer, value_type)?))),
            REG_DWORD_BIG_ENDIAN => Ok(DevicePropertyValue::UInt32(u32::from_be_bytes(fixed_bytes(buffer, value_type)?))),
            REG_QWORD => Ok(DevicePropertyValue::UInt64(u64::from_le_bytes(fixed_bytes(buffer, value_type)?))),
            REG_NONE | REG_BINARY => Ok(DevicePropertyValue::Binary(buffer.to_vec())),
            _ => Ok(DevicePropertyValue::Unsupported { type_tag: value_type, data: buffer.to_vec() }),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DevicePropertyValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            DevicePropertyValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// A single string is treated as a one-element list.
    pub fn into_string_list(self) -> Option<Vec<String>> {
        match self {
            DevicePropertyValue::StringList(values) => Some(values),
            DevicePropertyValue::String(value) => Some(vec![value]),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            DevicePropertyValue::Byte(value) => Some(value.into()),
            DevicePropertyValue::UInt16(value) => Some(value.into()),
            DevicePropertyValue::UInt32(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_guid(&self) -> Option<Guid> {
        match *self {
            DevicePropertyValue::Guid(value) => Some(value),
            _ => None,
        }
    }
}

fn fixed_size_of(base_type: u32) -> Option<usize> {
    match base_type {
        DEVPROP_TYPE_SBYTE | DEVPROP_TYPE_BYTE | DEVPROP_TYPE_BOOLEAN => Some(1),
        DEVPROP_TYPE_INT16 | DEVPROP_TYPE_UINT16 => Some(2),
        DEVPROP_TYPE_INT32 | DEVPROP_TYPE_UINT32 | DEVPROP_TYPE_FLOAT | DEVPROP_TYPE_DEVPROPTYPE | DEVPROP_TYPE_ERROR | DEVPROP_TYPE_NTSTATUS => Some(4),
        DEVPROP_TYPE_INT64 | DEVPROP_TYPE_UINT64 | DEVPROP_TYPE_DOUBLE | DEVPROP_TYPE_FILETIME => Some(8),
        DEVPROP_TYPE_GUID => Some(16),
        DEVPROP_TYPE_DEVPROPKEY => Some(20),
        _ => None,
    }
}

fn fixed_bytes<const N: usize>(buffer: &[u8], type_tag: u32) -> Result<[u8; N]> {
    buffer.try_into().map_err(|_| Error::InvalidPropertyData { type_tag, reason: "unexpected size for a fixed-size value" })
}

fn decode_fixed_size(buffer: &[u8], base_type: u32) -> Result<DevicePropertyValue> {
    let value = match base_type {
        DEVPROP_TYPE_SBYTE => DevicePropertyValue::SByte(i8::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_BYTE => DevicePropertyValue::Byte(u8::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_BOOLEAN => DevicePropertyValue::Boolean(u8::from_ne_bytes(fixed_bytes(buffer, base_type)?) != 0),
        DEVPROP_TYPE_INT16 => DevicePropertyValue::Int16(i16::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_UINT16 => DevicePropertyValue::UInt16(u16::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_INT32 | DEVPROP_TYPE_NTSTATUS => DevicePropertyValue::Int32(i32::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_UINT32 | DEVPROP_TYPE_DEVPROPTYPE | DEVPROP_TYPE_ERROR => DevicePropertyValue::UInt32(u32::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_INT64 => DevicePropertyValue::Int64(i64::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_UINT64 => DevicePropertyValue::UInt64(u64::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_FILETIME => DevicePropertyValue::FileTime(u64::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_FLOAT => DevicePropertyValue::Float(f32::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_DOUBLE => DevicePropertyValue::Double(f64::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_GUID => DevicePropertyValue::Guid(Guid::from_ne_bytes(fixed_bytes(buffer, base_type)?)),
        DEVPROP_TYPE_DEVPROPKEY => {
            // DEVPROPKEY: 16-byte fmtid followed by a 4-byte pid
            let bytes: [u8; 20] = fixed_bytes(buffer, base_type)?;
            let mut fmtid = [0u8; 16];
            fmtid.copy_from_slice(&bytes[0..16]);
            DevicePropertyValue::PropertyKey(DevicePropertyKey {
                fmtid: Guid::from_ne_bytes(fmtid),
                pid: u32::from_ne_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
            })
        },
        _ => return Err(Error::InvalidPropertyData { type_tag: base_type, reason: "not a fixed-size type" }),
    };
    Ok(value)
}

fn utf16_units(buffer: &[u8], type_tag: u32) -> Result<Vec<u16>> {
    if buffer.len() % 2 != 0 {
        return Err(Error::InvalidPropertyData { type_tag, reason: "UTF-16 data has an odd byte length" });
    }
    Ok(buffer.chunks_exact(2).map(|pair| u16::from_ne_bytes([pair[0], pair[1]])).collect())
}

fn decode_string(buffer: &[u8], type_tag: u32, require_terminator: bool) -> Result<String> {
    let units = utf16_units(buffer, type_tag)?;
    let end = match units.iter().position(|unit| *unit == 0) {
        Some(position) => position,
        None if require_terminator => {
            return Err(Error::InvalidPropertyData { type_tag, reason: "string is not null-terminated" });
        },
        None => units.len(),
    };
    Ok(String::from_utf16(&units[..end])?)
}

// a list of null-terminated strings followed by one extra terminator; the first empty string ends the list.
// Without require_terminator an unterminated tail is taken as the last string.
fn decode_multi_string(buffer: &[u8], type_tag: u32, require_terminator: bool) -> Result<Vec<String>> {
    let units = utf16_units(buffer, type_tag)?;
    if require_terminator && units.last().is_some_and(|unit| *unit != 0) {
        return Err(Error::InvalidPropertyData { type_tag, reason: "string list is not null-terminated" });
    }

    let mut strings = Vec::new();
    for segment in units.split(|unit| *unit == 0) {
        if segment.is_empty() {
            break;
        }
        strings.push(String::from_utf16(segment)?);
    }
    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16_bytes(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_ne_bytes).collect()
    }

    #[test]
    fn decodes_uint32() {
        let value = DevicePropertyValue::from_property_buffer(&0xC0FFEEu32.to_ne_bytes(), DEVPROP_TYPE_UINT32).unwrap();
        assert_eq!(value, DevicePropertyValue::UInt32(0xC0FFEE));
        assert_eq!(value.as_u32(), Some(0xC0FFEE));
    }

    #[test]
    fn rejects_wrong_size_for_fixed_types() {
        let error = DevicePropertyValue::from_property_buffer(&[1, 2, 3], DEVPROP_TYPE_UINT32).unwrap_err();
        assert!(matches!(error, Error::InvalidPropertyData { type_tag: DEVPROP_TYPE_UINT32, .. }));
    }

    #[test]
    fn decodes_string() {
        let value = DevicePropertyValue::from_property_buffer(&utf16_bytes("Disk drive\0"), DEVPROP_TYPE_STRING).unwrap();
        assert_eq!(value.as_str(), Some("Disk drive"));
    }

    #[test]
    fn device_strings_must_be_terminated() {
        let error = DevicePropertyValue::from_property_buffer(&utf16_bytes("Disk"), DEVPROP_TYPE_STRING).unwrap_err();
        assert!(matches!(error, Error::InvalidPropertyData { .. }));
    }

    #[test]
    fn decodes_string_list_in_order() {
        let buffer = utf16_bytes("SCSI\\DiskVMware_Virtual_disk\0SCSI\\Disk\0GenDisk\0\0");
        let value = DevicePropertyValue::from_property_buffer(&buffer, DEVPROP_TYPE_STRING_LIST).unwrap();
        assert_eq!(
            value,
            DevicePropertyValue::StringList(vec!["SCSI\\DiskVMware_Virtual_disk".into(), "SCSI\\Disk".into(), "GenDisk".into()])
        );
    }

    #[test]
    fn empty_string_list() {
        for buffer in [utf16_bytes("\0"), utf16_bytes("\0\0"), Vec::new()] {
            let value = DevicePropertyValue::from_property_buffer(&buffer, DEVPROP_TYPE_STRING_LIST).unwrap();
            assert_eq!(value, DevicePropertyValue::StringList(Vec::new()));
        }
    }

    #[test]
    fn unterminated_string_list_is_an_error() {
        let error = DevicePropertyValue::from_property_buffer(&utf16_bytes("a\0b"), DEVPROP_TYPE_STRING_LIST).unwrap_err();
        assert!(matches!(error, Error::InvalidPropertyData { .. }));
    }

    #[test]
    fn registry_string_list_may_omit_terminators() {
        for buffer in [utf16_bytes("a\0b"), utf16_bytes("a\0b\0")] {
            assert_eq!(
                DevicePropertyValue::from_registry_buffer(&buffer, REG_MULTI_SZ).unwrap(),
                DevicePropertyValue::StringList(vec!["a".into(), "b".into()])
            );
        }
        assert_eq!(
            DevicePropertyValue::from_registry_buffer(&utf16_bytes("disk"), REG_MULTI_SZ).unwrap(),
            DevicePropertyValue::StringList(vec!["disk".into()])
        );
    }

    #[test]
    fn decodes_guid() {
        let guid = Guid::from_u128(0x4d36e967_e325_11ce_bfc1_08002be10318);
        let value = DevicePropertyValue::from_property_buffer(&guid.to_ne_bytes(), DEVPROP_TYPE_GUID).unwrap();
        assert_eq!(value.as_guid(), Some(guid));
    }

    #[test]
    fn decodes_boolean_and_binary() {
        assert_eq!(DevicePropertyValue::from_property_buffer(&[0xFF], DEVPROP_TYPE_BOOLEAN).unwrap(), DevicePropertyValue::Boolean(true));
        assert_eq!(
            DevicePropertyValue::from_property_buffer(&[1, 2, 3], DEVPROP_TYPE_BINARY).unwrap(),
            DevicePropertyValue::Binary(vec![1, 2, 3])
        );
    }

    #[test]
    fn decodes_uint16_array() {
        let buffer: Vec<u8> = [7u16, 9u16].iter().flat_map(|value| value.to_ne_bytes()).collect();
        let value = DevicePropertyValue::from_property_buffer(&buffer, DEVPROP_TYPE_UINT16 | DEVPROP_TYPEMOD_ARRAY).unwrap();
        assert_eq!(value, DevicePropertyValue::Array(vec![DevicePropertyValue::UInt16(7), DevicePropertyValue::UInt16(9)]));
    }

    #[test]
    fn decodes_property_key() {
        let key = crate::device_property_key::DEVPKEY_DEVICE_FRIENDLY_NAME;
        let mut buffer = key.fmtid.to_ne_bytes().to_vec();
        buffer.extend_from_slice(&key.pid.to_ne_bytes());
        let value = DevicePropertyValue::from_property_buffer(&buffer, DEVPROP_TYPE_DEVPROPKEY).unwrap();
        assert_eq!(value, DevicePropertyValue::PropertyKey(key));
    }

    #[test]
    fn unknown_types_pass_bytes_through() {
        let value = DevicePropertyValue::from_property_buffer(&[9, 8, 7], 0x0000_0FF0).unwrap();
        assert_eq!(value, DevicePropertyValue::Unsupported { type_tag: 0x0000_0FF0, data: vec![9, 8, 7] });
    }

    #[test]
    fn decodes_registry_values() {
        assert_eq!(DevicePropertyValue::from_registry_buffer(&42u32.to_le_bytes(), REG_DWORD).unwrap(), DevicePropertyValue::UInt32(42));
        assert_eq!(DevicePropertyValue::from_registry_buffer(&42u32.to_be_bytes(), REG_DWORD_BIG_ENDIAN).unwrap(), DevicePropertyValue::UInt32(42));
        assert_eq!(DevicePropertyValue::from_registry_buffer(&7u64.to_le_bytes(), REG_QWORD).unwrap(), DevicePropertyValue::UInt64(7));
        // registry strings may omit the terminator
        assert_eq!(
            DevicePropertyValue::from_registry_buffer(&utf16_bytes("storahci"), REG_SZ).unwrap(),
            DevicePropertyValue::String("storahci".into())
        );
        assert_eq!(
            DevicePropertyValue::from_registry_buffer(&utf16_bytes("a\0b\0\0"), REG_MULTI_SZ).unwrap(),
            DevicePropertyValue::StringList(vec!["a".into(), "b".into()])
        );
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn type_tags_match_platform_headers() {
        use windows_sys::Win32::Devices::Properties as properties;
        use windows_sys::Win32::System::Registry as registry;

        assert_eq!(DEVPROP_TYPE_EMPTY, properties::DEVPROP_TYPE_EMPTY);
        assert_eq!(DEVPROP_TYPE_NULL, properties::DEVPROP_TYPE_NULL);
        assert_eq!(DEVPROP_TYPE_SBYTE, properties::DEVPROP_TYPE_SBYTE);
        assert_eq!(DEVPROP_TYPE_BYTE, properties::DEVPROP_TYPE_BYTE);
        assert_eq!(DEVPROP_TYPE_INT16, properties::DEVPROP_TYPE_INT16);
        assert_eq!(DEVPROP_TYPE_UINT16, properties::DEVPROP_TYPE_UINT16);
        assert_eq!(DEVPROP_TYPE_INT32, properties::DEVPROP_TYPE_INT32);
        assert_eq!(DEVPROP_TYPE_UINT32, properties::DEVPROP_TYPE_UINT32);
        assert_eq!(DEVPROP_TYPE_INT64, properties::DEVPROP_TYPE_INT64);
        assert_eq!(DEVPROP_TYPE_UINT64, properties::DEVPROP_TYPE_UINT64);
        assert_eq!(DEVPROP_TYPE_FLOAT, properties::DEVPROP_TYPE_FLOAT);
        assert_eq!(DEVPROP_TYPE_DOUBLE, properties::DEVPROP_TYPE_DOUBLE);
        assert_eq!(DEVPROP_TYPE_GUID, properties::DEVPROP_TYPE_GUID);
        assert_eq!(DEVPROP_TYPE_FILETIME, properties::DEVPROP_TYPE_FILETIME);
        assert_eq!(DEVPROP_TYPE_BOOLEAN, properties::DEVPROP_TYPE_BOOLEAN);
        assert_eq!(DEVPROP_TYPE_STRING, properties::DEVPROP_TYPE_STRING);
        assert_eq!(DEVPROP_TYPE_SECURITY_DESCRIPTOR, properties::DEVPROP_TYPE_SECURITY_DESCRIPTOR);
        assert_eq!(DEVPROP_TYPE_SECURITY_DESCRIPTOR_STRING, properties::DEVPROP_TYPE_SECURITY_DESCRIPTOR_STRING);
        assert_eq!(DEVPROP_TYPE_DEVPROPKEY, properties::DEVPROP_TYPE_DEVPROPKEY);
        assert_eq!(DEVPROP_TYPE_DEVPROPTYPE, properties::DEVPROP_TYPE_DEVPROPTYPE);
        assert_eq!(DEVPROP_TYPE_ERROR, properties::DEVPROP_TYPE_ERROR);
        assert_eq!(DEVPROP_TYPE_NTSTATUS, properties::DEVPROP_TYPE_NTSTATUS);
        assert_eq!(DEVPROP_TYPE_STRING_INDIRECT, properties::DEVPROP_TYPE_STRING_INDIRECT);
        assert_eq!(DEVPROP_TYPEMOD_ARRAY, properties::DEVPROP_TYPEMOD_ARRAY);
        assert_eq!(DEVPROP_TYPEMOD_LIST, properties::DEVPROP_TYPEMOD_LIST);
        assert_eq!(DEVPROP_TYPE_BINARY, properties::DEVPROP_TYPE_BINARY);
        assert_eq!(DEVPROP_TYPE_STRING_LIST, properties::DEVPROP_TYPE_STRING_LIST);
        assert_eq!(DEVPROP_MASK_TYPE, properties::DEVPROP_MASK_TYPE);
        assert_eq!(DEVPROP_MASK_TYPEMOD, properties::DEVPROP_MASK_TYPEMOD);

        assert_eq!(REG_NONE, registry::REG_NONE);
        assert_eq!(REG_SZ, registry::REG_SZ);
        assert_eq!(REG_EXPAND_SZ, registry::REG_EXPAND_SZ);
        assert_eq!(REG_BINARY, registry::REG_BINARY);
        assert_eq!(REG_DWORD, registry::REG_DWORD);
        assert_eq!(REG_DWORD_BIG_ENDIAN, registry::REG_DWORD_BIG_ENDIAN);
        assert_eq!(REG_MULTI_SZ, registry::REG_MULTI_SZ);
        assert_eq!(REG_QWORD, registry::REG_QWORD);
    }
}
