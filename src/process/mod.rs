//! Owning-process identity and access classification
//!
//! This module maps window handles to process/thread ids, recovers
//! executable names through restricted handles, classifies processes by
//! whether full access is refused, and keeps [`ProcessRecord`] consistent
//! with the live process table. All OS access goes through a
//! [`ProcessInfoProvider`].

pub mod access;
pub mod classify;
pub mod identity;
pub mod provider;
pub mod record;
pub mod scripted;

pub use access::probe_full_access_denied;
pub use classify::{is_platform_host_name, is_shell_process, process_exists, PLATFORM_HOST_NAME};
pub use identity::{
    file_name_from_path, get_process_id_and_thread_id, get_process_name,
    get_process_name_with_capacity, NAME_CAPACITY,
};
pub use provider::{ProcessAccess, ProcessInfoProvider, ProcessLookup, ScopedProcessHandle};
pub use record::ProcessRecord;
pub use scripted::{ScriptedAccess, ScriptedHandle, ScriptedProvider};
