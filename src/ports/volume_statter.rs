use std::io;

use crate::domain::DiskUsage;

/// Port for querying the usage of the volume that holds a path
pub trait VolumeStatter: Send + Sync {
    /// Query the volume holding `path`.
    ///
    /// Blocks for as long as the OS call does. Errors are the OS error of the
    /// underlying call, untouched.
    fn query(&self, path: &str) -> io::Result<DiskUsage>;
}
