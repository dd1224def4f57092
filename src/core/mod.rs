//! Core module containing fundamental types for Window-Process
//!
//! This module provides the building blocks shared by the identity
//! resolution and access classification layers: identifier aliases,
//! the window handle newtype, and the crate error type.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    OpenFailure,
    ProcessError,
    ProcessId,
    ProcessResult,
    ThreadId,
    WindowHandle,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
