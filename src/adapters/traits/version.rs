// ABOUTME: Version resolution trait.
// ABOUTME: Computes the next version identifier for a release channel.

use crate::release::ReleaseChannel;
use crate::types::{VersionId, VersionIdError};
use async_trait::async_trait;

/// Computes the next version for a channel.
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Resolve the next version. With `preview` set nothing is written.
    async fn resolve(&self, channel: ReleaseChannel, preview: bool)
    -> Result<VersionId, VersionError>;
}

/// Errors from version resolution.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("failed to run version command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("version command exited with {exit_code:?}: {stderr}")]
    CommandFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("version command produced an invalid version: {0}")]
    InvalidVersion(#[from] VersionIdError),
}
