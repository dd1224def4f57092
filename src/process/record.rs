//! Owning-process record for a window

use super::access::probe_full_access_denied;
use super::classify::{is_platform_host_name, is_shell_process, process_exists};
use super::identity::{get_process_id_and_thread_id, get_process_name};
use super::provider::ProcessInfoProvider;
use crate::core::types::{ProcessId, ProcessResult, ThreadId, WindowHandle};
use serde::Serialize;
use std::fmt;

/// Identity and access status of the process owning a window
///
/// Identity fields only change together through
/// [`update_process_info`](Self::update_process_info). The record is not
/// synchronised; owners serialise writes to a shared instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    process_id: ProcessId,
    thread_id: ThreadId,
    name: String,
    is_platform_host_app: bool,
    is_full_access_denied: bool,
}

impl ProcessRecord {
    /// Create a record from an observed (pid, tid, name)
    pub fn new<P>(provider: &P, pid: ProcessId, tid: ThreadId, name: impl Into<String>) -> Self
    where
        P: ProcessInfoProvider + ?Sized,
    {
        let mut record = ProcessRecord {
            process_id: 0,
            thread_id: 0,
            name: String::new(),
            is_platform_host_app: false,
            is_full_access_denied: false,
        };
        record.update_process_info(provider, pid, tid, name);
        // Fixed at construction; later updates leave it alone
        record.is_platform_host_app = is_platform_host_name(&record.name);
        record
    }

    /// Resolve the owner of `window` and build its record
    pub fn from_window<P>(provider: &P, window: WindowHandle) -> ProcessResult<Self>
    where
        P: ProcessInfoProvider + ?Sized,
    {
        let (pid, tid) = get_process_id_and_thread_id(provider, window)?;
        let name = get_process_name(provider, pid);
        Ok(Self::new(provider, pid, tid, name))
    }

    /// Replace the identity of this record
    ///
    /// Identity is assigned unconditionally before the access flag is
    /// recomputed; the probe has no failure outcome, so the transition
    /// always completes.
    pub fn update_process_info<P>(
        &mut self,
        provider: &P,
        pid: ProcessId,
        tid: ThreadId,
        name: impl Into<String>,
    ) where
        P: ProcessInfoProvider + ?Sized,
    {
        self.process_id = pid;
        self.thread_id = tid;
        self.name = name.into();
        self.is_full_access_denied = probe_full_access_denied(provider, pid);
    }

    /// Re-resolve the owner of `window` into this record
    ///
    /// On error the record is left untouched.
    pub fn refresh_from_window<P>(&mut self, provider: &P, window: WindowHandle) -> ProcessResult<()>
    where
        P: ProcessInfoProvider + ?Sized,
    {
        let (pid, tid) = get_process_id_and_thread_id(provider, window)?;
        let name = get_process_name(provider, pid);
        self.update_process_info(provider, pid, tid, name);
        Ok(())
    }

    pub fn process_id(&self) -> ProcessId {
        self.process_id
    }

    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Executable file name, empty when it could not be read
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_platform_host_app(&self) -> bool {
        self.is_platform_host_app
    }

    /// Whether full access to the process was refused at the last update
    pub fn is_full_access_denied(&self) -> bool {
        self.is_full_access_denied
    }

    /// Whether this process owns the shell window right now
    pub fn is_shell_process<P>(&self, provider: &P) -> bool
    where
        P: ProcessInfoProvider + ?Sized,
    {
        is_shell_process(provider, self.process_id)
    }

    /// Whether this process is still in the OS process table
    pub fn exists<P>(&self, provider: &P) -> bool
    where
        P: ProcessInfoProvider + ?Sized,
    {
        process_exists(provider, self.process_id)
    }

    /// Case-insensitive substring match on the executable name
    pub fn name_matches(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }

    /// Serialize to JSON for consumers outside the process
    pub fn to_json(&self) -> ProcessResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "<unknown>"
        } else {
            self.name.as_str()
        };
        write!(f, "[{}:{}] {}", self.process_id, self.thread_id, name)?;
        if self.is_platform_host_app {
            write!(f, " [host]")?;
        }
        if self.is_full_access_denied {
            write!(f, " [denied]")?;
        }
        Ok(())
    }
}
