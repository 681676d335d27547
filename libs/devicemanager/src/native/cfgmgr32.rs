// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::NativeCallError;
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{
    CM_Locate_DevNodeW,
    CM_MapCrToWin32Err,
    CM_Reenumerate_DevNode,
    CM_LOCATE_DEVNODE_NORMAL,
    CONFIGRET,
    CR_SUCCESS,
};
use windows_sys::Win32::Foundation::ERROR_GEN_FAILURE;

/// Failure when the CONFIGRET is not CR_SUCCESS; the code is its Win32 translation.
fn check_configret(function: &'static str, result: CONFIGRET) -> Result<(), NativeCallError> {
    if result != CR_SUCCESS {
        let code = unsafe { CM_MapCrToWin32Err(result, ERROR_GEN_FAILURE) };
        return Err(NativeCallError::new(function, code));
    }
    Ok(())
}

/// Devnode for a null-terminated instance ID; `None` locates the root of the device tree.
pub(crate) fn locate_dev_node(instance_id: Option<&[u16]>) -> Result<u32, NativeCallError> {
    let mut dev_inst: u32 = 0;
    let instance_id_ptr = instance_id.map_or(std::ptr::null(), |chars| chars.as_ptr());
    let result = unsafe { CM_Locate_DevNodeW(&mut dev_inst, instance_id_ptr, CM_LOCATE_DEVNODE_NORMAL) };
    check_configret("CM_Locate_DevNodeW", result)?;
    Ok(dev_inst)
}

// see: https://learn.microsoft.com/en-us/windows/win32/api/cfgmgr32/nf-cfgmgr32-cm_reenumerate_devnode
pub(crate) fn reenumerate_dev_node(dev_inst: u32, flags: u32) -> Result<(), NativeCallError> {
    let result = unsafe { CM_Reenumerate_DevNode(dev_inst, flags) };
    check_configret("CM_Reenumerate_DevNode", result)
}
