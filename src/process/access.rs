//! Access classification probe

use super::provider::{ProcessAccess, ProcessInfoProvider};
use crate::core::types::{ProcessId, UNKNOWN_PROCESS_ID};
use tracing::trace;

/// Whether opening `pid` with full access is refused for lack of rights
///
/// Only an access-denied failure counts. A missing process, an invalid id
/// or any other failure classifies as not denied. A successfully opened
/// handle is closed before returning.
pub fn probe_full_access_denied<P>(provider: &P, pid: ProcessId) -> bool
where
    P: ProcessInfoProvider + ?Sized,
{
    if pid == UNKNOWN_PROCESS_ID {
        return false;
    }

    match provider.open_process(pid, ProcessAccess::ALL_ACCESS) {
        Ok(handle) => {
            drop(handle);
            trace!(pid, "full access granted");
            false
        }
        Err(failure) => {
            trace!(pid, %failure, "full access open failed");
            failure.is_access_denied()
        }
    }
}
