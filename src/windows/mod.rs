//! Win32 implementation of the process-info provider
//!
//! All unsafe FFI calls are contained within this module. The rest of the
//! crate only sees [`Win32Provider`] through the
//! [`ProcessInfoProvider`](crate::process::ProcessInfoProvider) trait.

pub mod bindings;
pub mod provider;
pub mod types;
pub mod utils;

pub use provider::Win32Provider;
pub use types::Win32ProcessHandle;
pub use utils::ErrorCode;
