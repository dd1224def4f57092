//! Handle count stability across repeated probes
//!
//! Kept in its own test binary so no other test opens handles meanwhile.
#![cfg(windows)]

use window_process::process::{get_process_name, probe_full_access_denied};
use window_process::windows::bindings::kernel32::process_handle_count;
use window_process::windows::Win32Provider;

#[test]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_repeated_probes_do_not_leak_handles() {
    let provider = Win32Provider::new();
    let pid = std::process::id();

    // Warm up lazily created handles
    probe_full_access_denied(&provider, pid);
    get_process_name(&provider, pid);
    probe_full_access_denied(&provider, 4);

    let before = process_handle_count().unwrap();
    for _ in 0..500 {
        probe_full_access_denied(&provider, pid);
        get_process_name(&provider, pid);
        probe_full_access_denied(&provider, 4);
        get_process_name(&provider, 4);
    }
    let after = process_handle_count().unwrap();

    // A leak would add hundreds of handles
    assert!(after <= before + 8, "handle count grew from {} to {}", before, after);
}
