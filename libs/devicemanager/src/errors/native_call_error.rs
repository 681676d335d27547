// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use thiserror::Error;

/// A wrapped OS entry point reported failure.
///
/// `code` is the Win32 error code (the thread's last error, or the status the call returned) and
/// `description` is the system message for that code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{function} failed: {code}, {description}")]
pub struct NativeCallError {
    pub function: &'static str,
    pub code: u32,
    pub description: String,
}
impl NativeCallError {
    pub fn new(function: &'static str, code: u32) -> Self {
        Self { function, code, description: describe_error_code(code) }
    }
}

#[cfg(target_os = "windows")]
fn describe_error_code(code: u32) -> String {
    let message = windows::core::HRESULT::from_win32(code).message();
    message.trim_end().to_string()
}

#[cfg(not(target_os = "windows"))]
fn describe_error_code(code: u32) -> String {
    std::io::Error::from_raw_os_error(code as i32).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_function_code_and_description() {
        let error = NativeCallError { function: "SetupDiEnumDeviceInfo", code: 259, description: "No more data is available.".to_string() };
        assert_eq!(error.to_string(), "SetupDiEnumDeviceInfo failed: 259, No more data is available.");
    }

    #[test]
    fn new_fills_in_a_description() {
        let error = NativeCallError::new("RegQueryValueExW", 2);
        assert_eq!(error.code, 2);
        assert!(!error.description.is_empty());
    }
}
