use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The OS call itself failed; the error is passed through as-is
    #[error(transparent)]
    Os(#[from] io::Error),

    #[error("disk usage query for {path} did not finish within {timeout:?}")]
    Timeout { path: String, timeout: Duration },

    #[error("disk usage worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Raw OS error code, when the failure came from the OS call
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Os(e) => e.raw_os_error(),
            _ => None,
        }
    }
}
