//! Live Win32 process-info provider

use super::bindings::{toolhelp::ProcessSnapshot, user32};
use super::types::Win32ProcessHandle;
use crate::core::types::{OpenFailure, ProcessId, ProcessResult, ThreadId, WindowHandle};
use crate::process::{ProcessAccess, ProcessInfoProvider, ProcessLookup};
use tracing::debug;

/// [`ProcessInfoProvider`] backed by the Win32 API
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Provider;

impl Win32Provider {
    pub fn new() -> Self {
        Win32Provider
    }
}

impl ProcessInfoProvider for Win32Provider {
    type Handle = Win32ProcessHandle;

    fn window_thread_process_id(
        &self,
        window: WindowHandle,
    ) -> ProcessResult<(ProcessId, ThreadId)> {
        Ok(user32::window_thread_process_id(window))
    }

    fn open_process(
        &self,
        pid: ProcessId,
        access: ProcessAccess,
    ) -> Result<Win32ProcessHandle, OpenFailure> {
        Win32ProcessHandle::open(pid, access)
    }

    fn shell_window(&self) -> WindowHandle {
        user32::shell_window()
    }

    fn lookup_process(&self, pid: ProcessId) -> ProcessLookup {
        match ProcessSnapshot::new() {
            Ok(snapshot) => {
                if snapshot.contains(pid) {
                    ProcessLookup::Found
                } else {
                    ProcessLookup::NotFound
                }
            }
            Err(err) => {
                debug!(pid, error = %err, "process table unavailable");
                ProcessLookup::NotFound
            }
        }
    }
}
