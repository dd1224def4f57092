//! Windows error code handling utilities

use crate::core::types::OpenFailure;
use std::fmt;
use winapi::um::errhandlingapi::GetLastError;

/// Windows error codes reported by `OpenProcess` and `GetProcessImageFileNameW`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AccessDenied,
    InvalidHandle,
    InvalidParameter,
    InsufficientBuffer,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            5 => ErrorCode::AccessDenied,
            6 => ErrorCode::InvalidHandle,
            87 => ErrorCode::InvalidParameter,
            122 => ErrorCode::InsufficientBuffer,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl ErrorCode {
    /// Get the last Windows error of the calling thread
    pub fn last_error() -> Self {
        unsafe { ErrorCode::from(GetLastError()) }
    }

    /// Raw Win32 error value
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::AccessDenied => 5,
            ErrorCode::InvalidHandle => 6,
            ErrorCode::InvalidParameter => 87,
            ErrorCode::InsufficientBuffer => 122,
            ErrorCode::Unknown(code) => *code,
        }
    }
}

// OpenProcess reports a pid that is not in the process table as an invalid
// parameter.
impl From<ErrorCode> for OpenFailure {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::AccessDenied => OpenFailure::AccessDenied,
            ErrorCode::InvalidParameter => OpenFailure::NotFound,
            other => OpenFailure::Os(other.code()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::AccessDenied => write!(f, "Access denied"),
            ErrorCode::InvalidHandle => write!(f, "Invalid handle"),
            ErrorCode::InvalidParameter => write!(f, "Invalid parameter"),
            ErrorCode::InsufficientBuffer => write!(f, "Insufficient buffer"),
            ErrorCode::Unknown(code) => write!(f, "Unknown error: {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(ErrorCode::from(5), ErrorCode::AccessDenied);
        assert_eq!(ErrorCode::from(6), ErrorCode::InvalidHandle);
        assert_eq!(ErrorCode::from(87), ErrorCode::InvalidParameter);
        assert_eq!(ErrorCode::from(122), ErrorCode::InsufficientBuffer);
        assert_eq!(ErrorCode::from(18), ErrorCode::Unknown(18));
        assert_eq!(ErrorCode::from(299), ErrorCode::Unknown(299));
        assert_eq!(ErrorCode::from(122).code(), 122);
        assert_eq!(ErrorCode::Unknown(1450).code(), 1450);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::AccessDenied), "Access denied");
        assert_eq!(format!("{}", ErrorCode::InsufficientBuffer), "Insufficient buffer");
        assert_eq!(format!("{}", ErrorCode::Unknown(123)), "Unknown error: 123");
    }

    #[test]
    fn test_open_failure_mapping() {
        assert_eq!(OpenFailure::from(ErrorCode::AccessDenied), OpenFailure::AccessDenied);
        assert_eq!(OpenFailure::from(ErrorCode::InvalidParameter), OpenFailure::NotFound);
        assert_eq!(OpenFailure::from(ErrorCode::InvalidHandle), OpenFailure::Os(6));
        assert_eq!(OpenFailure::from(ErrorCode::Unknown(1450)), OpenFailure::Os(1450));
    }
}
