//! Filesystem volume usage for a path.
//!
//! One OS call per query: statvfs(3) on Unix, `GetDiskFreeSpaceExW` on
//! Windows. Unix records also carry inode counts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

use std::io;

pub use adapters::PlatformStatter;
pub use application::UsageService;
pub use config::Config;
pub use domain::{unescape_path, BlockStats, DiskUsage, InodeUsage};
pub use error::{Error, Result};
pub use ports::VolumeStatter;

/// Query the usage of the volume holding `path`.
///
/// Errors are the raw OS error of the underlying call.
pub fn query_disk_usage(path: &str) -> io::Result<DiskUsage> {
    PlatformStatter::new().query(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_query_disk_usage_root() {
        let usage = query_disk_usage("/").unwrap();
        assert!(usage.total > 0);
    }

    #[test]
    fn test_query_disk_usage_nonexistent() {
        assert!(query_disk_usage("/no/such/volstat/path").is_err());
    }
}
