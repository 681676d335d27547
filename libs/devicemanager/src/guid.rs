// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::str::FromStr;

// NOTE: the field layout matches the Win32 GUID structure so that conversions are plain field copies; data4 holds the last two groups of the canonical string form (2 + 6 octets)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}
impl Guid {
    pub const NIL: Guid = Guid::from_u128(0);

    pub const fn from_u128(value: u128) -> Self {
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: (value as u64).to_be_bytes(),
        }
    }

    pub const fn as_u128(&self) -> u128 {
        ((self.data1 as u128) << 96)
            | ((self.data2 as u128) << 80)
            | ((self.data3 as u128) << 64)
            | (u64::from_be_bytes(self.data4) as u128)
    }

    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Decodes the 16-byte in-memory representation used by DEVPROP_TYPE_GUID (native endian for the first three fields).
    pub fn from_ne_bytes(bytes: [u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);
        Self {
            data1: u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_ne_bytes([bytes[4], bytes[5]]),
            data3: u16::from_ne_bytes([bytes[6], bytes[7]]),
            data4,
        }
    }

    pub fn to_ne_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.data1.to_ne_bytes());
        bytes[4..6].copy_from_slice(&self.data2.to_ne_bytes());
        bytes[6..8].copy_from_slice(&self.data3.to_ne_bytes());
        bytes[8..16].copy_from_slice(&self.data4);
        bytes
    }

    /// Registry form, e.g. `{4d36e967-e325-11ce-bfc1-08002be10318}`.
    pub fn to_braced_string(&self) -> String {
        format!("{{{}}}", self)
    }
}

#[cfg(target_os = "windows")]
impl From<windows_sys::core::GUID> for Guid {
    fn from(value: windows_sys::core::GUID) -> Self {
        Self { data1: value.data1, data2: value.data2, data3: value.data3, data4: value.data4 }
    }
}

#[cfg(target_os = "windows")]
impl From<Guid> for windows_sys::core::GUID {
    fn from(value: Guid) -> Self {
        Self { data1: value.data1, data2: value.data2, data3: value.data3, data4: value.data4 }
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3,
            self.data4[0], self.data4[1],
            self.data4[2], self.data4[3], self.data4[4], self.data4[5], self.data4[6], self.data4[7],
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseGuidError;

impl std::fmt::Display for ParseGuidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid GUID string")
    }
}

impl std::error::Error for ParseGuidError {}

impl FromStr for Guid {
    type Err = ParseGuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // if present, strip a matching pair of curly braces
        let s = match s.strip_prefix('{') {
            Some(inner) => inner.strip_suffix('}').ok_or(ParseGuidError)?,
            None => s,
        };

        // canonical layout: 8-4-4-4-12 hex digits
        let groups: Vec<&str> = s.split('-').collect();
        let expected_lengths = [8, 4, 4, 4, 12];
        if groups.len() != expected_lengths.len() {
            return Err(ParseGuidError);
        }
        for (group, expected_length) in groups.iter().zip(expected_lengths) {
            if group.len() != expected_length || !group.chars().all(|ch| ch.is_ascii_hexdigit()) {
                return Err(ParseGuidError);
            }
        }

        let hex: String = groups.concat();
        let value = u128::from_str_radix(&hex, 16).map_err(|_| ParseGuidError)?;
        Ok(Guid::from_u128(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISK_DRIVE: u128 = 0x4d36e967_e325_11ce_bfc1_08002be10318;

    #[test]
    fn parses_braced_and_bare_forms() {
        let braced: Guid = "{4D36E967-E325-11CE-BFC1-08002BE10318}".parse().unwrap();
        let bare: Guid = "4d36e967-e325-11ce-bfc1-08002be10318".parse().unwrap();
        assert_eq!(braced, bare);
        assert_eq!(braced.as_u128(), DISK_DRIVE);
        assert_eq!(braced.data1, 0x4d36e967);
        assert_eq!(braced.data4, [0xbf, 0xc1, 0x08, 0x00, 0x2b, 0xe1, 0x03, 0x18]);
    }

    #[test]
    fn displays_lowercase_canonical_form() {
        let guid = Guid::from_u128(DISK_DRIVE);
        assert_eq!(guid.to_string(), "4d36e967-e325-11ce-bfc1-08002be10318");
        assert_eq!(guid.to_braced_string(), "{4d36e967-e325-11ce-bfc1-08002be10318}");
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in ["", "{", "{}", "{4d36e967-e325-11ce-bfc1-08002be10318", "4d36e967e32511cebfc108002be10318", "4d36e967-e325-11ce-bfc1-08002be1031g", "+d36e967-e325-11ce-bfc1-08002be10318"] {
            assert_eq!(input.parse::<Guid>(), Err(ParseGuidError), "input: {input:?}");
        }
    }

    #[test]
    fn native_byte_layout_matches_fields() {
        let guid = Guid::from_u128(DISK_DRIVE);
        let bytes = guid.to_ne_bytes();
        assert_eq!(&bytes[8..], &guid.data4);
        assert_eq!(Guid::from_ne_bytes(bytes), guid);
    }

    #[test]
    fn nil_guid() {
        assert!(Guid::NIL.is_nil());
        assert!(!Guid::from_u128(DISK_DRIVE).is_nil());
    }
}
