use std::ffi::OsStr;
use std::io;
use std::os::windows::prelude::*;

use tracing::debug;
use windows::core::{HRESULT, PCWSTR};
use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

use crate::domain::DiskUsage;
use crate::ports::VolumeStatter;

/// Volume statter backed by GetDiskFreeSpaceExW
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Statter;

impl Win32Statter {
    pub fn new() -> Self {
        Self
    }
}

impl VolumeStatter for Win32Statter {
    fn query(&self, path: &str) -> io::Result<DiskUsage> {
        let wide = wide(path);
        let mut free_to_caller = 0u64;
        let mut total = 0u64;
        let mut total_free = 0u64;

        let result = unsafe {
            GetDiskFreeSpaceExW(
                PCWSTR(wide.as_ptr()),
                Some(&mut free_to_caller as *mut u64),
                Some(&mut total as *mut u64),
                Some(&mut total_free as *mut u64),
            )
        };
        result.map_err(|e| os_error(e.code()))?;

        debug!(path, total, total_free, "GetDiskFreeSpaceExW");
        Ok(DiskUsage::from_free_space(path, total, total_free))
    }
}

/// Win32 error code carried in the low word of an `HRESULT_FROM_WIN32` value
fn os_error(code: HRESULT) -> io::Error {
    io::Error::from_raw_os_error(code.0 & 0xFFFF)
}

fn wide(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
}
