//! User32.dll bindings for window ownership queries

use crate::core::types::{ProcessId, ThreadId, WindowHandle};
use ::windows::Win32::Foundation::HWND;
use ::windows::Win32::UI::WindowsAndMessaging::{GetShellWindow, GetWindowThreadProcessId};

/// Owning process and thread of a window; `(0, 0)` for an invalid handle
pub fn window_thread_process_id(window: WindowHandle) -> (ProcessId, ThreadId) {
    let mut pid: u32 = 0;
    let tid = unsafe { GetWindowThreadProcessId(HWND(window.as_raw()), Some(&mut pid as *mut u32)) };
    if tid == 0 {
        return (0, 0);
    }
    (pid, tid)
}

/// The desktop shell window, null when no shell is running
pub fn shell_window() -> WindowHandle {
    let hwnd = unsafe { GetShellWindow() };
    WindowHandle::from_raw(hwnd.0)
}
