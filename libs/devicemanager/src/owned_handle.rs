// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{NativeCallError, Result};

pub(crate) type ReleaseFn<H> = fn(H) -> std::result::Result<(), NativeCallError>;

/// Owns a native handle and runs its release function exactly once: through [`OwnedHandle::close`],
/// which reports failure, or on drop (including every early return and `?`), which logs it.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) struct OwnedHandle<H: Copy> {
    handle: H,
    release: ReleaseFn<H>,
    kind: &'static str,
    released: bool,
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
impl<H: Copy> OwnedHandle<H> {
    /// Takes ownership of a handle returned by a successful open call.
    pub(crate) fn new(handle: H, release: ReleaseFn<H>, kind: &'static str) -> Self {
        Self { handle, release, kind, released: false }
    }

    pub(crate) fn get(&self) -> H {
        self.handle
    }

    pub(crate) fn close(mut self) -> Result<()> {
        self.released = true;
        (self.release)(self.handle)?;
        tracing::trace!(kind = self.kind, "released handle");
        Ok(())
    }
}

impl<H: Copy> Drop for OwnedHandle<H> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(error) = (self.release)(self.handle) {
            tracing::warn!(%error, kind = self.kind, "could not release handle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static RELEASED: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
        static FAIL_RELEASE: Cell<bool> = const { Cell::new(false) };
    }

    fn record_release(handle: u32) -> std::result::Result<(), NativeCallError> {
        RELEASED.with(|released| released.borrow_mut().push(handle));
        if FAIL_RELEASE.with(Cell::get) {
            return Err(NativeCallError::new("SetupDiDestroyDeviceInfoList", 6));
        }
        Ok(())
    }

    fn released() -> Vec<u32> {
        RELEASED.with(|released| released.borrow().clone())
    }

    fn open(handle: u32) -> OwnedHandle<u32> {
        OwnedHandle::new(handle, record_release, "device info set")
    }

    // mirrors DeviceManager::collect_devices: open, walk members with `?`, then close
    fn collect(handle: u32, members: &[std::result::Result<u32, u32>]) -> Result<Vec<u32>> {
        let owned = open(handle);
        let collected = members
            .iter()
            .map(|member| member.map_err(|code| Error::from(NativeCallError::new("SetupDiEnumDeviceInfo", code))))
            .collect::<Result<Vec<_>>>()?;
        owned.close()?;
        Ok(collected)
    }

    #[test]
    fn explicit_close_releases_once() {
        let owned = open(7);
        assert_eq!(owned.get(), 7);
        owned.close().unwrap();
        assert_eq!(released(), [7]);
    }

    #[test]
    fn drop_releases_once() {
        {
            let _owned = open(8);
        }
        assert_eq!(released(), [8]);
    }

    #[test]
    fn early_return_in_a_collect_releases_once() {
        let error = collect(9, &[Ok(1), Err(13), Ok(3)]).unwrap_err();
        assert_eq!(error.native_code(), Some(13));
        assert_eq!(released(), [9]);

        assert_eq!(collect(10, &[Ok(1), Ok(2)]).unwrap(), [1, 2]);
        assert_eq!(released(), [9, 10]);
    }

    #[test]
    fn failed_close_is_reported_and_not_retried_on_drop() {
        FAIL_RELEASE.with(|fail| fail.set(true));
        let error = open(11).close().unwrap_err();
        assert_eq!(error.native_code(), Some(6));
        assert_eq!(released(), [11]);
    }
}
