//! Opaque window handle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to an on-screen window
///
/// Holds the raw `HWND` value. The handle may be stale or invalid; queries
/// against it degrade to the `0` sentinel rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(isize);

impl WindowHandle {
    /// Wraps a raw window handle value
    pub const fn from_raw(raw: isize) -> Self {
        WindowHandle(raw)
    }

    /// The null window
    pub const fn null() -> Self {
        WindowHandle(0)
    }

    /// Raw handle value
    pub const fn as_raw(&self) -> isize {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}
