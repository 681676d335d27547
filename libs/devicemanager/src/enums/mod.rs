// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

mod device_class;
pub use device_class::*;

mod device_info_set_flags;
pub use device_info_set_flags::DeviceInfoSetFlags;

mod registry_key_options;
pub use registry_key_options::*;
