//! PSAPI.dll bindings for process image names

use crate::windows::utils::{wide_prefix, wide_to_string, ErrorCode};
use winapi::shared::minwindef::DWORD;
use winapi::um::psapi::GetProcessImageFileNameW;
use winapi::um::winnt::HANDLE;

/// Longest path the OS reports, in UTF-16 units
const MAX_IMAGE_PATH: usize = 32767;

/// Safe wrapper for GetProcessImageFileNameW
///
/// Returns at most `capacity` UTF-16 units of the path. The OS refuses
/// buffers shorter than the path, so a failed read with a short buffer is
/// retried once at full length and the result cut down to `capacity`.
/// The path comes back in NT device form, e.g.
/// `\Device\HarddiskVolume3\Windows\notepad.exe`.
///
/// # Safety
/// The handle must be a valid process handle opened with at least
/// `PROCESS_QUERY_LIMITED_INFORMATION`.
pub unsafe fn get_process_image_file_name(
    handle: HANDLE,
    capacity: usize,
) -> Result<String, ErrorCode> {
    let first = capacity.clamp(1, MAX_IMAGE_PATH);
    let path = match read_image_path(handle, first) {
        Err(_) if first < MAX_IMAGE_PATH => read_image_path(handle, MAX_IMAGE_PATH)?,
        other => other?,
    };

    Ok(wide_to_string(wide_prefix(&path, capacity)))
}

unsafe fn read_image_path(handle: HANDLE, size: usize) -> Result<Vec<u16>, ErrorCode> {
    let mut buffer = vec![0u16; size];

    let length = GetProcessImageFileNameW(handle, buffer.as_mut_ptr(), size as DWORD);
    if length == 0 {
        return Err(ErrorCode::last_error());
    }

    buffer.truncate(length as usize);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::bindings::kernel32;
    use winapi::um::winnt::PROCESS_QUERY_LIMITED_INFORMATION;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_image_name_of_current_process() {
        let handle =
            kernel32::open_process(std::process::id(), PROCESS_QUERY_LIMITED_INFORMATION).unwrap();

        let path = unsafe { get_process_image_file_name(handle, 1000) };
        unsafe {
            kernel32::close_handle(handle).unwrap();
        }

        let path = path.unwrap();
        assert!(path.starts_with("\\Device\\"));
        assert!(path.to_lowercase().ends_with(".exe"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_image_name_null_handle_fails() {
        let result = unsafe { get_process_image_file_name(std::ptr::null_mut(), 1000) };
        assert!(result.is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_image_name_cut_to_short_capacity() {
        let handle =
            kernel32::open_process(std::process::id(), PROCESS_QUERY_LIMITED_INFORMATION).unwrap();

        let full = unsafe { get_process_image_file_name(handle, 1000) };
        let short = unsafe { get_process_image_file_name(handle, 12) };
        unsafe {
            kernel32::close_handle(handle).unwrap();
        }

        let full = full.unwrap();
        let short = short.unwrap();
        assert_eq!(short.encode_utf16().count(), 12);
        assert!(full.starts_with(&short));
    }
}
