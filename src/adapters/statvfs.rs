use std::io;

use nix::sys::statvfs::statvfs;
use tracing::debug;

use crate::domain::{BlockStats, DiskUsage};
use crate::ports::VolumeStatter;

/// Volume statter backed by statvfs(3)
#[derive(Debug, Clone, Copy, Default)]
pub struct StatvfsStatter;

impl StatvfsStatter {
    pub fn new() -> Self {
        Self
    }

    fn block_stats(&self, path: &str) -> io::Result<BlockStats> {
        let stat = statvfs(path).map_err(io::Error::from)?;

        // block counters are in f_frsize units; f_bsize is only the preferred I/O size
        Ok(BlockStats {
            block_size: stat.fragment_size() as u64,
            blocks: stat.blocks() as u64,
            blocks_free: stat.blocks_free() as u64,
            blocks_available: stat.blocks_available() as u64,
            files: stat.files() as u64,
            files_free: stat.files_free() as u64,
        })
    }
}

impl VolumeStatter for StatvfsStatter {
    fn query(&self, path: &str) -> io::Result<DiskUsage> {
        let stats = self.block_stats(path)?;
        debug!(path, ?stats, "statvfs");
        Ok(DiskUsage::from_block_stats(path, &stats))
    }
}
