//! String conversion utilities for Windows API

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

/// Convert a Windows wide string (UTF-16) to a Rust string
///
/// Stops at the first NUL, if any. Unpaired surrogates are replaced.
pub fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    let os_string = OsString::from_wide(&wide[..len]);
    os_string.to_string_lossy().into_owned()
}

/// First `capacity` UTF-16 units of a wide string
///
/// A surrogate pair that does not fit whole is dropped rather than split.
pub fn wide_prefix(wide: &[u16], capacity: usize) -> &[u16] {
    if wide.len() <= capacity {
        return wide;
    }
    let mut end = capacity;
    if end > 0 && (0xD800..=0xDBFF).contains(&wide[end - 1]) {
        end -= 1;
    }
    &wide[..end]
}
