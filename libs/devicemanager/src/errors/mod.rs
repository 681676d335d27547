// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

mod error;
pub use error::{Error, Result};

mod native_call_error;
pub use native_call_error::NativeCallError;
