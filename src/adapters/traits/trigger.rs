// ABOUTME: Build trigger trait for downstream release builds.
// ABOUTME: Starts build/publish jobs for a branch once the release is pushed.

use async_trait::async_trait;

/// Options passed through to the build system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOptions {
    /// Upload build artifacts to the release host.
    pub publish_to_host: bool,
    /// The release runs unattended.
    pub automatic: bool,
}

/// Starts downstream build jobs.
#[async_trait]
pub trait BuildTrigger: Send + Sync {
    async fn trigger(&self, branch: &str, options: TriggerOptions) -> Result<(), TriggerError>;
}

/// Errors from triggering builds.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("failed to run build command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("build command exited with {exit_code:?}: {stderr}")]
    CommandFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
}
