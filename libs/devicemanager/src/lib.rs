// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

//! Enumeration of the devices known to the Windows device configuration manager: per-device properties,
//! registry-backed configuration, parent/child relations and storage rescans.
//!
//! GUIDs, property keys, value decoding, the device tree index and the device class table are
//! platform-neutral; everything that calls into the OS is only built on Windows.

mod enums;
pub use enums::*;

mod errors;
pub use errors::*;

mod guid;
pub use guid::{Guid, ParseGuidError};

pub mod device_property_key;
pub use device_property_key::DevicePropertyKey;

pub mod device_property_value;
pub use device_property_value::DevicePropertyValue;

pub mod device_tree;
pub use device_tree::{instance_ids_match, normalize_instance_id, DeviceTree};

pub mod size_probe;

mod owned_handle;

#[cfg(target_os = "windows")]
mod native;

#[cfg(target_os = "windows")]
mod device_info_set;
#[cfg(target_os = "windows")]
pub use device_info_set::{DeviceInfo, DeviceInfoIter, DeviceInfoSet};

#[cfg(target_os = "windows")]
mod registry_key;
#[cfg(target_os = "windows")]
pub use registry_key::RegistryKey;

#[cfg(target_os = "windows")]
mod device;
#[cfg(target_os = "windows")]
pub use device::Device;

#[cfg(target_os = "windows")]
mod device_manager;
#[cfg(target_os = "windows")]
pub use device_manager::DeviceManager;
