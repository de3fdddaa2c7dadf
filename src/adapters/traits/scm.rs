// ABOUTME: Source control operations trait.
// ABOUTME: Tag, push, and inspect the local repository.

use crate::adapters::process::CommandOutput;
use async_trait::async_trait;

/// Source control operations: tag, push, inspect.
///
/// `tag` and `push` report the command's exit status instead of failing on
/// it, so the caller decides how a rejected tag or push is surfaced.
#[async_trait]
pub trait SourceControl: Send + Sync {
    /// Create an annotated tag `name` with `message` at HEAD.
    async fn tag(&self, name: &str, message: &str) -> Result<CommandOutput, ScmError>;

    /// Push HEAD to `branch` on the remote, following annotated tags when `with_tags`.
    async fn push(&self, branch: &str, with_tags: bool) -> Result<CommandOutput, ScmError>;

    /// Subject line of the most recent commit.
    async fn last_commit_subject(&self) -> Result<String, ScmError>;

    /// Name of the currently checked out branch.
    async fn current_branch(&self) -> Result<String, ScmError>;
}

/// Errors from source control operations.
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("unexpected git output: {0}")]
    InvalidOutput(String),
}
