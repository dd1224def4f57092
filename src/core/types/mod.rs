//! Core type definitions for Window-Process
//!
//! Identifier aliases, the opaque window handle, and error types.

mod error;
mod window;

// Re-export all public types
pub use error::{OpenFailure, ProcessError, ProcessResult};
pub use window::WindowHandle;

// Common type aliases
pub type ProcessId = u32;
pub type ThreadId = u32;

/// Sentinel process id meaning "unknown/invalid"
pub const UNKNOWN_PROCESS_ID: ProcessId = 0;
