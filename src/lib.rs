//! Window-Process: identity and access status of the process owning a window
//!
//! Resolves window handles to process/thread ids, recovers executable names
//! through restricted handles, and flags processes that refuse full access.
//! OS state is reached through a [`ProcessInfoProvider`]; on Windows the live
//! implementation is [`windows::Win32Provider`].

pub mod config;
pub mod core;
pub mod process;
#[cfg(windows)]
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{OpenFailure, ProcessError, ProcessId, ProcessResult, ThreadId, WindowHandle};

// Re-export the record and its operations
pub use process::{
    get_process_id_and_thread_id, get_process_name, is_shell_process, probe_full_access_denied,
    process_exists, ProcessAccess, ProcessInfoProvider, ProcessLookup, ProcessRecord,
    ScopedProcessHandle, ScriptedProvider,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_constants() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_record_reexport() {
        let provider = ScriptedProvider::new().with_process(1234, "C:\\test.exe");
        let record = ProcessRecord::new(&provider, 1234, 1240, "test.exe");
        assert_eq!(record.process_id(), 1234);
        assert_eq!(record.name(), "test.exe");
    }

    #[test]
    fn test_process_and_thread_id_reexport() {
        let window = WindowHandle::from_raw(0x40);
        let provider = ScriptedProvider::new()
            .with_process(1234, "C:\\Windows\\notepad.exe")
            .with_window(window, 1234, 5678);

        let ids: (ProcessId, ThreadId) = get_process_id_and_thread_id(&provider, window).unwrap();
        assert_eq!(ids, (1234, 5678));
        assert_eq!(get_process_name(&provider, ids.0), "notepad.exe");
    }
}
