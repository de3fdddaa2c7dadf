// ABOUTME: SourceControl implementation backed by the system git binary.
// ABOUTME: Runs git in the repository root and captures its output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::process::{CommandOutput, run_command};
use super::traits::{ScmError, SourceControl};

/// Default remote releases are pushed to.
pub const DEFAULT_REMOTE: &str = "origin";

/// Runs `git` in a repository.
#[derive(Debug, Clone)]
pub struct SystemGit {
    repo_root: PathBuf,
    remote: String,
}

impl SystemGit {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Run git with `args`, returning its output whatever the exit status.
    async fn git(&self, args: &[&str]) -> Result<CommandOutput, ScmError> {
        let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        Ok(run_command("git", &args, &self.repo_root, &HashMap::new()).await?)
    }

    /// Run git with `args` and return stdout, failing on a non-zero exit.
    async fn git_stdout(&self, args: &[&str]) -> Result<String, ScmError> {
        let output = self.git(args).await?;
        if !output.success() {
            return Err(ScmError::CommandFailed {
                command: args.first().copied().unwrap_or_default().to_string(),
                stderr: output.diagnostic().to_string(),
            });
        }
        Ok(output.stdout)
    }

    /// Most recent tag reachable from HEAD, if any.
    pub async fn latest_tag(&self) -> Result<Option<String>, ScmError> {
        let output = self.git(&["describe", "--tags", "--abbrev=0"]).await?;
        if !output.success() {
            // No tags yet
            return Ok(None);
        }
        let tag = output.stdout.trim();
        Ok((!tag.is_empty()).then(|| tag.to_string()))
    }

    /// Commit subjects after `since` (or the whole history), newest first.
    pub async fn subjects_since(&self, since: Option<&str>) -> Result<Vec<String>, ScmError> {
        let range = since.map(|tag| format!("{tag}..HEAD"));
        let mut args = vec!["log", "--pretty=format:%s"];
        if let Some(range) = range.as_deref() {
            args.push(range);
        }

        let stdout = self.git_stdout(&args).await?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

#[async_trait]
impl SourceControl for SystemGit {
    async fn tag(&self, name: &str, message: &str) -> Result<CommandOutput, ScmError> {
        self.git(&["tag", "-a", "-m", message, name]).await
    }

    async fn push(&self, branch: &str, with_tags: bool) -> Result<CommandOutput, ScmError> {
        let refspec = format!("HEAD:{branch}");
        let mut args = vec!["push", self.remote.as_str(), refspec.as_str()];
        if with_tags {
            args.push("--follow-tags");
        }
        self.git(&args).await
    }

    async fn last_commit_subject(&self) -> Result<String, ScmError> {
        let stdout = self.git_stdout(&["log", "-n", "1", "--pretty=format:%s"]).await?;
        Ok(stdout.trim().to_string())
    }

    async fn current_branch(&self) -> Result<String, ScmError> {
        let stdout = self.git_stdout(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        let branch = stdout.trim();
        if branch.is_empty() || branch == "HEAD" {
            return Err(ScmError::InvalidOutput(
                "HEAD is detached; pass --branch to name the release branch".to_string(),
            ));
        }
        Ok(branch.to_string())
    }
}
