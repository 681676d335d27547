// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{DevicePropertyKey, NativeCallError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    NativeCall(#[from] NativeCallError),

    #[error("property {0} is not present on this device")]
    PropertyNotFound(DevicePropertyKey),

    #[error("invalid data for property type {type_tag:#x}: {reason}")]
    InvalidPropertyData { type_tag: u32, reason: &'static str },

    #[error("string is not valid UTF-16: {0}")]
    StringDecoding(#[from] std::string::FromUtf16Error),

    #[error("buffer size changed between calls (probed {probed}, now requires {required})")]
    BufferSizeChanged { probed: usize, required: usize },
}

impl Error {
    /// Platform error code, when this error came from a native call.
    pub fn native_code(&self) -> Option<u32> {
        match self {
            Error::NativeCall(error) => Some(error.code),
            _ => None,
        }
    }
}
