use serde::{Deserialize, Serialize};

use super::escape::unescape_path;

/// Raw counters returned by one filesystem statistics call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStats {
    /// Unit of every block counter below (statvfs `f_frsize`), not the I/O size
    pub block_size: u64,
    pub blocks: u64,
    pub blocks_free: u64,
    /// Free blocks available to unprivileged users
    pub blocks_available: u64,
    pub files: u64,
    pub files_free: u64,
}

/// Inode counters (Unix volumes only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InodeUsage {
    pub inodes_total: u64,
    pub inodes_used: u64,
    pub inodes_free: u64,
    pub inodes_used_percent: f64,
}

/// Usage of the volume holding a given path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskUsage {
    pub path: String,
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub used_percent: f64,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub inodes: Option<InodeUsage>,
}

impl DiskUsage {
    /// Build a record from statvfs-style counters.
    ///
    /// `free` counts the blocks available to unprivileged users while `used`
    /// counts every non-free block, so `used + free` can be less than `total`
    /// when the filesystem reserves blocks. The percentage is taken over
    /// `used + free` for that reason.
    ///
    /// When the inode counters are inconsistent (`files < files_free`) only the
    /// raw figures are kept and every derived field stays zero.
    pub fn from_block_stats(path: &str, stats: &BlockStats) -> Self {
        let mut usage = Self {
            path: unescape_path(path),
            total: stats.blocks.saturating_mul(stats.block_size),
            free: stats.blocks_available.saturating_mul(stats.block_size),
            used: 0,
            used_percent: 0.0,
            inodes: Some(InodeUsage {
                inodes_total: stats.files,
                inodes_free: stats.files_free,
                ..InodeUsage::default()
            }),
        };

        if stats.files < stats.files_free {
            return usage;
        }

        let inodes_used = stats.files - stats.files_free;
        let inodes_used_percent = if stats.files == 0 {
            0.0
        } else {
            (inodes_used as f64 / stats.files as f64) * 100.0
        };
        usage.inodes = Some(InodeUsage {
            inodes_total: stats.files,
            inodes_used,
            inodes_free: stats.files_free,
            inodes_used_percent,
        });

        usage.used = stats
            .blocks
            .saturating_sub(stats.blocks_free)
            .saturating_mul(stats.block_size);

        let denominator = usage.used.saturating_add(usage.free);
        usage.used_percent = if denominator == 0 {
            0.0
        } else {
            (usage.used as f64 / denominator as f64) * 100.0
        };

        usage
    }

    /// Build a record from the byte counts of a disk free space query.
    ///
    /// A zero-capacity volume yields a non-finite percentage.
    pub fn from_free_space(path: &str, total: u64, total_free: u64) -> Self {
        Self {
            path: path.to_string(),
            total,
            free: total_free,
            used: total.saturating_sub(total_free),
            used_percent: (total as f64 - total_free as f64) / total as f64 * 100.0,
            inodes: None,
        }
    }

    pub fn has_inodes(&self) -> bool {
        self.inodes.is_some()
    }
}
