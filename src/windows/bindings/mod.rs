//! Windows API bindings
//!
//! Thin wrappers over kernel32, psapi, toolhelp and user32 calls.

pub mod kernel32;
pub mod psapi;
pub mod toolhelp;
pub mod user32;
