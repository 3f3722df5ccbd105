use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::adapters::PlatformStatter;
use crate::domain::DiskUsage;
use crate::error::{Error, Result};
use crate::ports::VolumeStatter;

/// Application service for disk usage queries
#[derive(Clone)]
pub struct UsageService {
    statter: Arc<dyn VolumeStatter>,
}

impl UsageService {
    pub fn new(statter: Arc<dyn VolumeStatter>) -> Self {
        Self { statter }
    }

    /// Service backed by the statter of the current build target
    pub fn platform() -> Self {
        Self::new(Arc::new(PlatformStatter::default()))
    }

    /// Query `path` on the calling thread
    pub fn query(&self, path: &str) -> io::Result<DiskUsage> {
        debug!(path, "querying disk usage");
        self.statter.query(path)
    }

    /// Query `path` on a blocking worker, giving up after `timeout`.
    ///
    /// The OS call cannot be cancelled. On timeout the worker is left to
    /// finish on its own and its result is dropped.
    pub async fn query_with_timeout(&self, path: &str, timeout: Duration) -> Result<DiskUsage> {
        let statter = Arc::clone(&self.statter);
        let owned = path.to_string();
        let worker = tokio::task::spawn_blocking(move || statter.query(&owned));

        match tokio::time::timeout(timeout, worker).await {
            Ok(joined) => Ok(joined??),
            Err(_) => {
                warn!(path, ?timeout, "disk usage query timed out");
                Err(Error::Timeout {
                    path: path.to_string(),
                    timeout,
                })
            }
        }
    }
}
