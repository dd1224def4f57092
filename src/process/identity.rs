//! Window-to-process identity resolution

use super::provider::{ProcessAccess, ProcessInfoProvider, ScopedProcessHandle};
use crate::core::types::{ProcessId, ProcessResult, ThreadId, WindowHandle};
use tracing::debug;

/// Image name buffer capacity, in UTF-16 units
pub const NAME_CAPACITY: usize = 1000;

/// Resolve the process and thread owning a window
///
/// Either id may be `0` when the handle is invalid; callers must treat `0`
/// as unknown.
pub fn get_process_id_and_thread_id<P>(
    provider: &P,
    window: WindowHandle,
) -> ProcessResult<(ProcessId, ThreadId)>
where
    P: ProcessInfoProvider + ?Sized,
{
    let (pid, tid) = provider.window_thread_process_id(window)?;
    if pid == 0 {
        debug!(%window, "window has no resolvable owning process");
    }
    Ok((pid, tid))
}

/// Executable file name of a process, or an empty string
pub fn get_process_name<P>(provider: &P, pid: ProcessId) -> String
where
    P: ProcessInfoProvider + ?Sized,
{
    get_process_name_with_capacity(provider, pid, NAME_CAPACITY)
}

/// [`get_process_name`] with an explicit image name buffer capacity
pub fn get_process_name_with_capacity<P>(provider: &P, pid: ProcessId, capacity: usize) -> String
where
    P: ProcessInfoProvider + ?Sized,
{
    let handle = match provider.open_process(pid, ProcessAccess::QUERY_LIMITED_INFORMATION) {
        Ok(handle) => handle,
        Err(failure) => {
            debug!(pid, %failure, "cannot open process for name query");
            return String::new();
        }
    };

    match handle.query_image_name(capacity) {
        Ok(path) => file_name_from_path(&path).to_string(),
        Err(err) => {
            debug!(pid, error = %err, "image name query failed");
            String::new()
        }
    }
}

/// Trailing file name component of a path
///
/// Accepts both separators, since image paths come back in NT device form
/// (`\Device\HarddiskVolume3\...`) as well as DOS form.
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit(|c: char| c == '\\' || c == '/')
        .next()
        .unwrap_or(path)
}
