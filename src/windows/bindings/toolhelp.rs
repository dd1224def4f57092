//! Process table snapshots using the ToolHelp32 API

use crate::core::types::{ProcessError, ProcessId, ProcessResult};
use std::mem;
use winapi::shared::minwindef::FALSE;
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::tlhelp32::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, PROCESSENTRY32W,
    TH32CS_SNAPPROCESS,
};
use winapi::um::winnt::HANDLE;

/// Iterator over the process ids of a point-in-time process table snapshot
pub struct ProcessSnapshot {
    snapshot: HANDLE,
    first_called: bool,
}

impl ProcessSnapshot {
    /// Capture the current process table
    pub fn new() -> ProcessResult<Self> {
        let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) };
        if snapshot.is_null() || snapshot == INVALID_HANDLE_VALUE {
            return Err(ProcessError::WindowsApi(
                "Failed to create process snapshot".to_string(),
            ));
        }
        Ok(ProcessSnapshot {
            snapshot,
            first_called: false,
        })
    }

    /// Whether the snapshot lists `pid`
    pub fn contains(self, pid: ProcessId) -> bool {
        self.into_iter().any(|listed| listed == pid)
    }
}

impl Iterator for ProcessSnapshot {
    type Item = ProcessId;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe {
            let mut entry: PROCESSENTRY32W = mem::zeroed();
            entry.dwSize = mem::size_of::<PROCESSENTRY32W>() as u32;

            let success = if !self.first_called {
                self.first_called = true;
                Process32FirstW(self.snapshot, &mut entry)
            } else {
                Process32NextW(self.snapshot, &mut entry)
            };

            if success == FALSE {
                None
            } else {
                Some(entry.th32ProcessID)
            }
        }
    }
}

impl Drop for ProcessSnapshot {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.snapshot);
        }
    }
}
