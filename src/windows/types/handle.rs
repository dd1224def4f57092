//! Scoped Win32 process handle

use crate::core::types::{OpenFailure, ProcessError, ProcessId, ProcessResult};
use crate::process::{ProcessAccess, ScopedProcessHandle};
use crate::windows::bindings::{kernel32, psapi};
use std::fmt;
use winapi::um::winnt::HANDLE;

/// Open process handle, closed when dropped
///
/// Only successful opens produce a value, so the wrapped handle is never
/// null.
pub struct Win32ProcessHandle {
    handle: HANDLE,
    pid: ProcessId,
    access: ProcessAccess,
}

impl Win32ProcessHandle {
    /// Open a process with the given access rights
    pub fn open(pid: ProcessId, access: ProcessAccess) -> Result<Self, OpenFailure> {
        let handle = kernel32::open_process(pid, access.value()).map_err(OpenFailure::from)?;
        Ok(Win32ProcessHandle {
            handle,
            pid,
            access,
        })
    }

    /// Get the access rights the handle was opened with
    pub fn access(&self) -> ProcessAccess {
        self.access
    }
}

impl ScopedProcessHandle for Win32ProcessHandle {
    fn pid(&self) -> ProcessId {
        self.pid
    }

    fn query_image_name(&self, capacity: usize) -> ProcessResult<String> {
        unsafe { psapi::get_process_image_file_name(self.handle, capacity) }
            .map_err(|code| ProcessError::query_failed(self.pid, code.to_string()))
    }
}

impl Drop for Win32ProcessHandle {
    fn drop(&mut self) {
        // Ignore errors on cleanup
        unsafe {
            let _ = kernel32::close_handle(self.handle);
        }
    }
}

impl fmt::Debug for Win32ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Win32ProcessHandle")
            .field("pid", &self.pid)
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

// Send + Sync are safe because HANDLEs are process-local
unsafe impl Send for Win32ProcessHandle {}
unsafe impl Sync for Win32ProcessHandle {}
