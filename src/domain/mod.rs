pub mod disk_usage;
pub mod escape;

pub use disk_usage::{BlockStats, DiskUsage, InodeUsage};
pub use escape::unescape_path;
