//! Process-info provider seam
//!
//! Every OS query the core performs goes through [`ProcessInfoProvider`].
//! The Win32 implementation lives in `crate::windows`; tests drive the core
//! with [`ScriptedProvider`](super::ScriptedProvider).

use crate::core::types::{OpenFailure, ProcessId, ProcessResult, ThreadId, WindowHandle};

/// Access rights requested when opening a process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// All possible access rights
    pub const ALL_ACCESS: Self = Self { value: 0x1FFFFF };
    /// Restricted query, granted even for most elevated processes
    pub const QUERY_LIMITED_INFORMATION: Self = Self { value: 0x1000 };

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether every right in `other` is also requested here
    pub fn includes(&self, other: Self) -> bool {
        self.value & other.value == other.value
    }
}

/// Outcome of looking a process id up in the live process table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessLookup {
    Found,
    NotFound,
}

/// An open process handle that is closed when dropped
///
/// Implementors must release the underlying OS handle in `Drop`, so that a
/// handle leaves scope closed on every path, early returns included.
pub trait ScopedProcessHandle {
    /// Process the handle refers to
    fn pid(&self) -> ProcessId;

    /// Full image path of the process
    ///
    /// At most `capacity` UTF-16 units are returned; longer paths are
    /// truncated silently.
    fn query_image_name(&self, capacity: usize) -> ProcessResult<String>;
}

/// OS capabilities consumed by the identity and access logic
pub trait ProcessInfoProvider {
    /// Scoped handle type produced by [`open_process`](Self::open_process)
    type Handle: ScopedProcessHandle;

    /// Owning process and thread of a window
    ///
    /// An invalid or stale handle yields `(0, 0)`, not an error. Errors are
    /// reserved for the resolution call itself being unavailable.
    fn window_thread_process_id(
        &self,
        window: WindowHandle,
    ) -> ProcessResult<(ProcessId, ThreadId)>;

    /// Open a process; a failed open never produces a handle
    fn open_process(
        &self,
        pid: ProcessId,
        access: ProcessAccess,
    ) -> Result<Self::Handle, OpenFailure>;

    /// The desktop shell window, or the null window if there is no shell
    fn shell_window(&self) -> WindowHandle;

    /// Look a process id up in the live process table
    fn lookup_process(&self, pid: ProcessId) -> ProcessLookup;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_access_constants() {
        assert_eq!(ProcessAccess::ALL_ACCESS.value(), 0x1FFFFF);
        assert_eq!(ProcessAccess::QUERY_LIMITED_INFORMATION.value(), 0x1000);
    }

    #[test]
    fn test_all_access_includes_limited_query() {
        assert!(ProcessAccess::ALL_ACCESS.includes(ProcessAccess::QUERY_LIMITED_INFORMATION));
        assert!(ProcessAccess::ALL_ACCESS.includes(ProcessAccess::ALL_ACCESS));
        assert!(!ProcessAccess::QUERY_LIMITED_INFORMATION.includes(ProcessAccess::ALL_ACCESS));
    }
}
