//! Custom error types for Window-Process

use std::fmt;
use thiserror::Error;

/// Main error type for process queries
///
/// Expected OS conditions (missing process, insufficient rights) are never
/// reported through this type; they surface as data on the record instead.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Process info provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Query failed for process {pid}: {reason}")]
    QueryFailed { pid: u32, reason: String },

    #[error("Windows API: {0}")]
    WindowsApi(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for process queries
pub type ProcessResult<T> = Result<T, ProcessError>;

impl ProcessError {
    /// Creates a query failed error for a process
    pub fn query_failed(pid: u32, reason: impl Into<String>) -> Self {
        ProcessError::QueryFailed {
            pid,
            reason: reason.into(),
        }
    }

    /// Creates a provider unavailable error
    pub fn provider_unavailable(reason: impl fmt::Display) -> Self {
        ProcessError::ProviderUnavailable(reason.to_string())
    }
}

/// Why an attempt to open a process did not yield a handle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFailure {
    #[error("access denied")]
    AccessDenied,

    #[error("process not found")]
    NotFound,

    #[error("OS error {0}")]
    Os(u32),
}

impl OpenFailure {
    /// True only for the permission failure
    pub fn is_access_denied(&self) -> bool {
        matches!(self, OpenFailure::AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProcessError::query_failed(1234, "image name unavailable");
        assert_eq!(
            err.to_string(),
            "Query failed for process 1234: image name unavailable"
        );

        let err = ProcessError::provider_unavailable("user32 not loaded");
        assert_eq!(
            err.to_string(),
            "Process info provider unavailable: user32 not loaded"
        );

        let err = ProcessError::WindowsApi("GetShellWindow failed".to_string());
        assert_eq!(err.to_string(), "Windows API: GetShellWindow failed");
    }

    #[test]
    fn test_helper_methods() {
        match ProcessError::query_failed(42, "test reason") {
            ProcessError::QueryFailed { pid, reason } => {
                assert_eq!(pid, 42);
                assert_eq!(reason, "test reason");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_from_implementations() {
        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let err: ProcessError = json_err.into();
        assert!(matches!(err, ProcessError::JsonError(_)));
    }

    #[test]
    fn test_open_failure() {
        assert!(OpenFailure::AccessDenied.is_access_denied());
        assert!(!OpenFailure::NotFound.is_access_denied());
        assert!(!OpenFailure::Os(31).is_access_denied());

        assert_eq!(OpenFailure::AccessDenied.to_string(), "access denied");
        assert_eq!(OpenFailure::NotFound.to_string(), "process not found");
        assert_eq!(OpenFailure::Os(31).to_string(), "OS error 31");
    }
}
