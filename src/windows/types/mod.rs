//! Windows-specific type wrappers

pub mod handle;

pub use handle::Win32ProcessHandle;
