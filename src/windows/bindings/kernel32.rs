//! Kernel32.dll bindings for process handle operations

use crate::windows::utils::ErrorCode;
use winapi::shared::minwindef::{DWORD, FALSE};
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{GetCurrentProcess, GetProcessHandleCount, OpenProcess};
use winapi::um::winnt::HANDLE;

/// Safe wrapper for OpenProcess
///
/// The last error is captured immediately after a failed open.
pub fn open_process(pid: u32, desired_access: u32) -> Result<HANDLE, ErrorCode> {
    let handle = unsafe { OpenProcess(desired_access, FALSE, pid) };
    if handle.is_null() {
        Err(ErrorCode::last_error())
    } else {
        Ok(handle)
    }
}

/// Safe wrapper for CloseHandle; a null handle is a no-op
///
/// # Safety
/// The handle must be null or a handle owned by the caller that has not
/// been closed yet.
pub unsafe fn close_handle(handle: HANDLE) -> Result<(), ErrorCode> {
    if handle.is_null() {
        return Ok(());
    }

    if CloseHandle(handle) == FALSE {
        Err(ErrorCode::last_error())
    } else {
        Ok(())
    }
}

/// Number of handles currently open in this process
pub fn process_handle_count() -> Result<u32, ErrorCode> {
    let mut count: DWORD = 0;
    let result = unsafe { GetProcessHandleCount(GetCurrentProcess(), &mut count) };
    if result == FALSE {
        Err(ErrorCode::last_error())
    } else {
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winapi::um::winnt::{PROCESS_ALL_ACCESS, PROCESS_QUERY_LIMITED_INFORMATION};

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_close_null_handle() {
        unsafe {
            assert!(close_handle(std::ptr::null_mut()).is_ok());
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_zero_pid_fails() {
        let result = open_process(0, PROCESS_ALL_ACCESS);
        assert_eq!(result.unwrap_err(), ErrorCode::InvalidParameter);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_and_close_current_process() {
        let handle = open_process(std::process::id(), PROCESS_QUERY_LIMITED_INFORMATION).unwrap();
        unsafe {
            assert!(close_handle(handle).is_ok());
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_handle_count_available() {
        assert!(process_handle_count().unwrap() > 0);
    }

    #[test]
    fn test_access_rights() {
        assert_eq!(PROCESS_ALL_ACCESS, 0x1FFFFF);
        assert_eq!(PROCESS_QUERY_LIMITED_INFORMATION, 0x1000);
    }
}
