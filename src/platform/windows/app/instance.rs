//! Single-instance lock backed by a named mutex.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{CloseHandle, GetLastError, ERROR_ALREADY_EXISTS, HANDLE};
use windows::Win32::System::Threading::{CreateMutexW, ReleaseMutex};

use crate::platform::windows::ffi::to_wide;

/// Holds the named mutex for the lifetime of the process.
///
/// Released on drop; the OS releases it on abnormal termination.
pub struct SingleInstance {
    handle: HANDLE,
}

impl SingleInstance {
    /// Try to become the only running instance.
    ///
    /// Returns `Ok(None)` if another process already owns `name`.
    pub fn acquire(name: &str) -> windows::core::Result<Option<Self>> {
        let name_wide = to_wide(name);
        unsafe {
            let handle = CreateMutexW(None, true, PCWSTR(name_wide.as_ptr()))?;
            if GetLastError() == ERROR_ALREADY_EXISTS {
                let _ = CloseHandle(handle);
                return Ok(None);
            }
            tracing::debug!("Acquired single-instance mutex {}", name);
            Ok(Some(Self { handle }))
        }
    }
}

impl Drop for SingleInstance {
    fn drop(&mut self) {
        unsafe {
            let _ = ReleaseMutex(self.handle);
            let _ = CloseHandle(self.handle);
        }
    }
}
