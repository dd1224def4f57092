//! Scripted process-info provider
//!
//! Replays a fixed process table, window map and access policy without
//! touching the OS, and counts handles so leaks are observable.

use super::provider::{ProcessAccess, ProcessInfoProvider, ProcessLookup, ScopedProcessHandle};
use crate::core::types::{OpenFailure, ProcessError, ProcessId, ProcessResult, ThreadId, WindowHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// How a scripted process responds to open requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedAccess {
    /// Every open succeeds
    Full,
    /// Limited queries succeed, anything beyond is refused
    Elevated,
    /// Every open is refused
    Protected,
}

#[derive(Debug, Clone)]
struct ScriptedProcess {
    // None when the process exits between open and query
    image_path: Option<String>,
    access: ScriptedAccess,
}

#[derive(Debug, Default)]
struct HandleCounters {
    live: AtomicUsize,
    opened: AtomicUsize,
    attempts: AtomicUsize,
}

/// In-memory [`ProcessInfoProvider`]
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    processes: HashMap<ProcessId, ScriptedProcess>,
    windows: HashMap<WindowHandle, (ProcessId, ThreadId)>,
    shell_window: WindowHandle,
    unavailable: bool,
    counters: Arc<HandleCounters>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a process the caller can fully open
    pub fn with_process(self, pid: ProcessId, image_path: impl Into<String>) -> Self {
        self.insert(pid, Some(image_path.into()), ScriptedAccess::Full)
    }

    /// Add a process that refuses full access but answers limited queries
    pub fn with_elevated_process(self, pid: ProcessId, image_path: impl Into<String>) -> Self {
        self.insert(pid, Some(image_path.into()), ScriptedAccess::Elevated)
    }

    /// Add a process that refuses every open
    pub fn with_protected_process(self, pid: ProcessId) -> Self {
        self.insert(pid, None, ScriptedAccess::Protected)
    }

    /// Add a process that opens but exits before its image name is read
    pub fn with_vanishing_process(self, pid: ProcessId) -> Self {
        self.insert(pid, None, ScriptedAccess::Full)
    }

    /// Map a window to its owning process and thread
    pub fn with_window(mut self, window: WindowHandle, pid: ProcessId, tid: ThreadId) -> Self {
        self.windows.insert(window, (pid, tid));
        self
    }

    /// Map a window and make it the shell window
    pub fn with_shell_window(self, window: WindowHandle, pid: ProcessId, tid: ThreadId) -> Self {
        self.with_window(window, pid, tid).with_shell_handle(window)
    }

    /// Set the shell window without mapping it to a process
    pub fn with_shell_handle(mut self, window: WindowHandle) -> Self {
        self.shell_window = window;
        self
    }

    /// Make window resolution fail as if the OS call were missing
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Simulate a process exiting
    pub fn remove_process(&mut self, pid: ProcessId) {
        self.processes.remove(&pid);
    }

    /// Reassign a window to another process
    pub fn reassign_window(&mut self, window: WindowHandle, pid: ProcessId, tid: ThreadId) {
        self.windows.insert(window, (pid, tid));
    }

    /// Handles currently open
    pub fn open_handles(&self) -> usize {
        self.counters.live.load(Ordering::SeqCst)
    }

    /// Handles successfully opened so far
    pub fn total_opened(&self) -> usize {
        self.counters.opened.load(Ordering::SeqCst)
    }

    /// Open calls made so far, successful or not
    pub fn open_attempts(&self) -> usize {
        self.counters.attempts.load(Ordering::SeqCst)
    }

    fn insert(mut self, pid: ProcessId, image_path: Option<String>, access: ScriptedAccess) -> Self {
        self.processes
            .insert(pid, ScriptedProcess { image_path, access });
        self
    }
}

impl ProcessInfoProvider for ScriptedProvider {
    type Handle = ScriptedHandle;

    fn window_thread_process_id(
        &self,
        window: WindowHandle,
    ) -> ProcessResult<(ProcessId, ThreadId)> {
        if self.unavailable {
            return Err(ProcessError::provider_unavailable(
                "window resolution is not available",
            ));
        }
        Ok(self.windows.get(&window).copied().unwrap_or((0, 0)))
    }

    fn open_process(
        &self,
        pid: ProcessId,
        access: ProcessAccess,
    ) -> Result<ScriptedHandle, OpenFailure> {
        self.counters.attempts.fetch_add(1, Ordering::SeqCst);

        let process = self.processes.get(&pid).ok_or(OpenFailure::NotFound)?;
        let granted = match process.access {
            ScriptedAccess::Full => true,
            ScriptedAccess::Elevated => {
                ProcessAccess::QUERY_LIMITED_INFORMATION.includes(access)
            }
            ScriptedAccess::Protected => false,
        };
        if !granted {
            return Err(OpenFailure::AccessDenied);
        }

        self.counters.live.fetch_add(1, Ordering::SeqCst);
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(ScriptedHandle {
            pid,
            image_path: process.image_path.clone(),
            counters: Arc::clone(&self.counters),
        })
    }

    fn shell_window(&self) -> WindowHandle {
        self.shell_window
    }

    fn lookup_process(&self, pid: ProcessId) -> ProcessLookup {
        if self.processes.contains_key(&pid) {
            ProcessLookup::Found
        } else {
            ProcessLookup::NotFound
        }
    }
}

/// Handle produced by [`ScriptedProvider`]; decrements the live count on drop
#[derive(Debug)]
pub struct ScriptedHandle {
    pid: ProcessId,
    image_path: Option<String>,
    counters: Arc<HandleCounters>,
}

impl ScopedProcessHandle for ScriptedHandle {
    fn pid(&self) -> ProcessId {
        self.pid
    }

    fn query_image_name(&self, capacity: usize) -> ProcessResult<String> {
        let path = self
            .image_path
            .as_deref()
            .ok_or_else(|| ProcessError::query_failed(self.pid, "process has exited"))?;

        let mut units = 0;
        let truncated = path
            .chars()
            .take_while(|c| {
                units += c.len_utf16();
                units <= capacity
            })
            .collect();
        Ok(truncated)
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        self.counters.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_counted_and_released() {
        let provider = ScriptedProvider::new().with_process(10, "C:\\a.exe");

        let first = provider.open_process(10, ProcessAccess::ALL_ACCESS).unwrap();
        let second = provider
            .open_process(10, ProcessAccess::QUERY_LIMITED_INFORMATION)
            .unwrap();
        assert_eq!(provider.open_handles(), 2);

        drop(first);
        assert_eq!(provider.open_handles(), 1);
        drop(second);
        assert_eq!(provider.open_handles(), 0);
        assert_eq!(provider.total_opened(), 2);
    }

    #[test]
    fn test_failed_opens_hold_no_handle() {
        let provider = ScriptedProvider::new()
            .with_elevated_process(20, "C:\\b.exe")
            .with_protected_process(30);

        assert_eq!(
            provider.open_process(20, ProcessAccess::ALL_ACCESS).unwrap_err(),
            OpenFailure::AccessDenied
        );
        assert_eq!(
            provider
                .open_process(30, ProcessAccess::QUERY_LIMITED_INFORMATION)
                .unwrap_err(),
            OpenFailure::AccessDenied
        );
        assert_eq!(
            provider.open_process(40, ProcessAccess::ALL_ACCESS).unwrap_err(),
            OpenFailure::NotFound
        );
        assert_eq!(provider.open_attempts(), 3);
        assert_eq!(provider.open_handles(), 0);
    }

    #[test]
    fn test_query_truncates_to_capacity() {
        let provider = ScriptedProvider::new().with_process(10, "C:\\abc.exe");
        let handle = provider.open_process(10, ProcessAccess::QUERY_LIMITED_INFORMATION).unwrap();

        assert_eq!(handle.pid(), 10);
        assert_eq!(handle.query_image_name(1000).unwrap(), "C:\\abc.exe");
        assert_eq!(handle.query_image_name(4).unwrap(), "C:\\a");
        assert_eq!(handle.query_image_name(0).unwrap(), "");
    }

    #[test]
    fn test_unknown_window_resolves_to_zero() {
        let provider = ScriptedProvider::new();
        assert_eq!(
            provider
                .window_thread_process_id(WindowHandle::from_raw(1))
                .unwrap(),
            (0, 0)
        );
        assert!(provider.shell_window().is_null());
    }
}
