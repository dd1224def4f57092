//! Shell, platform-host and liveness classification
//!
//! These answer from live OS state on every call; nothing here is cached.

use super::identity::get_process_id_and_thread_id;
use super::provider::{ProcessInfoProvider, ProcessLookup};
use crate::core::types::{ProcessId, UNKNOWN_PROCESS_ID};
use tracing::debug;

/// Executable name of the broker hosting modern application windows
pub const PLATFORM_HOST_NAME: &str = "applicationframehost.exe";

/// Case-insensitive match against [`PLATFORM_HOST_NAME`]
pub fn is_platform_host_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(PLATFORM_HOST_NAME)
}

/// Whether `pid` is currently in the OS process table
///
/// The `0` sentinel is never reported as existing.
pub fn process_exists<P>(provider: &P, pid: ProcessId) -> bool
where
    P: ProcessInfoProvider + ?Sized,
{
    if pid == UNKNOWN_PROCESS_ID {
        return false;
    }
    provider.lookup_process(pid) == ProcessLookup::Found
}

/// Whether `pid` owns the desktop shell window
pub fn is_shell_process<P>(provider: &P, pid: ProcessId) -> bool
where
    P: ProcessInfoProvider + ?Sized,
{
    let shell = provider.shell_window();
    if shell.is_null() {
        return false;
    }

    match get_process_id_and_thread_id(provider, shell) {
        Ok((shell_pid, _)) => shell_pid != UNKNOWN_PROCESS_ID && shell_pid == pid,
        Err(err) => {
            debug!(error = %err, "cannot resolve shell window owner");
            false
        }
    }
}
