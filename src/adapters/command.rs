// ABOUTME: Collaborators backed by configured external commands.
// ABOUTME: Version bump, release notes and build trigger scripts run in the repository root.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use nonempty::NonEmpty;

use super::process::{CommandOutput, run_command};
use super::traits::{
    BuildTrigger, NotesError, NotesGenerator, ReleaseNotes, TriggerError, TriggerOptions,
    VersionError, VersionResolver,
};
use crate::release::ReleaseChannel;
use crate::types::VersionId;

/// A configured command line and the directory it runs in.
#[derive(Debug, Clone)]
struct ConfiguredCommand {
    argv: NonEmpty<String>,
    cwd: PathBuf,
}

impl ConfiguredCommand {
    fn new(argv: NonEmpty<String>, cwd: PathBuf) -> Self {
        Self { argv, cwd }
    }

    /// Run with `extra` appended to the configured arguments.
    async fn run(
        &self,
        extra: &[&str],
        envs: &HashMap<String, String>,
    ) -> std::io::Result<CommandOutput> {
        let args: Vec<String> = self
            .argv
            .tail
            .iter()
            .cloned()
            .chain(extra.iter().map(|a| (*a).to_string()))
            .collect();
        run_command(&self.argv.head, &args, &self.cwd, envs).await
    }
}

// =============================================================================
// Version bump command
// =============================================================================

/// Resolves versions with a bump script: `<command> --bump <channel> [--dry-run]`.
#[derive(Debug, Clone)]
pub struct CommandVersionResolver {
    command: ConfiguredCommand,
}

impl CommandVersionResolver {
    pub fn new(argv: NonEmpty<String>, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            command: ConfiguredCommand::new(argv, repo_root.into()),
        }
    }
}

/// Extract the version from bump script output such as `new version: 2.0.0`.
///
/// Text after the first colon is used when there is one. A `v` marker is
/// added when missing.
pub(crate) fn parse_bump_output(stdout: &str) -> Result<VersionId, VersionError> {
    let raw = stdout
        .split_once(':')
        .map_or(stdout, |(_, after)| after)
        .trim();
    if raw.is_empty() || raw.starts_with('v') {
        return Ok(VersionId::new(raw)?);
    }
    Ok(VersionId::new(&format!("v{raw}"))?)
}

#[async_trait]
impl VersionResolver for CommandVersionResolver {
    async fn resolve(
        &self,
        channel: ReleaseChannel,
        preview: bool,
    ) -> Result<VersionId, VersionError> {
        let mut extra = vec!["--bump", channel.as_str()];
        if preview {
            extra.push("--dry-run");
        }

        let output = self.command.run(&extra, &HashMap::new()).await?;
        if !output.success() {
            return Err(VersionError::CommandFailed {
                exit_code: output.exit_code,
                stderr: output.diagnostic().to_string(),
            });
        }

        let version = parse_bump_output(&output.stdout)?;
        if !preview {
            tracing::info!("Successfully bumped version to {}", version);
        }
        Ok(version)
    }
}

// =============================================================================
// Release notes command
// =============================================================================

/// Generates notes with a script: `<command> --branch <branch> --version <version>`.
///
/// The script prints either JSON `{"text": ..., "warning": ...}` or plain notes text.
#[derive(Debug, Clone)]
pub struct CommandNotesGenerator {
    command: ConfiguredCommand,
}

impl CommandNotesGenerator {
    pub fn new(argv: NonEmpty<String>, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            command: ConfiguredCommand::new(argv, repo_root.into()),
        }
    }
}

pub(crate) fn parse_notes_output(stdout: &str) -> ReleaseNotes {
    serde_json::from_str::<ReleaseNotes>(stdout.trim())
        .unwrap_or_else(|_| ReleaseNotes::new(stdout.trim_end()))
}

#[async_trait]
impl NotesGenerator for CommandNotesGenerator {
    async fn generate(
        &self,
        branch: &str,
        version: &VersionId,
    ) -> Result<ReleaseNotes, NotesError> {
        let extra = ["--branch", branch, "--version", version.as_str()];
        let output = self.command.run(&extra, &HashMap::new()).await?;
        if !output.success() {
            return Err(NotesError::CommandFailed {
                exit_code: output.exit_code,
                stderr: output.diagnostic().to_string(),
            });
        }

        Ok(parse_notes_output(&output.stdout))
    }
}

// =============================================================================
// Build trigger command
// =============================================================================

/// Triggers release builds with a script, passing the request via environment.
///
/// Sets `CUTTER_BRANCH`, `CUTTER_PUBLISH_TO_HOST` and `CUTTER_AUTOMATIC_RELEASE`.
#[derive(Debug, Clone)]
pub struct CommandBuildTrigger {
    command: ConfiguredCommand,
}

impl CommandBuildTrigger {
    pub fn new(argv: NonEmpty<String>, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            command: ConfiguredCommand::new(argv, repo_root.into()),
        }
    }
}

pub(crate) fn trigger_env(branch: &str, options: TriggerOptions) -> HashMap<String, String> {
    let mut env = HashMap::new();
    env.insert("CUTTER_BRANCH".to_string(), branch.to_string());
    env.insert(
        "CUTTER_PUBLISH_TO_HOST".to_string(),
        options.publish_to_host.to_string(),
    );
    env.insert(
        "CUTTER_AUTOMATIC_RELEASE".to_string(),
        options.automatic.to_string(),
    );
    env
}

#[async_trait]
impl BuildTrigger for CommandBuildTrigger {
    async fn trigger(&self, branch: &str, options: TriggerOptions) -> Result<(), TriggerError> {
        tracing::info!("Triggering release builds for {}", branch);

        let output = self.command.run(&[], &trigger_env(branch, options)).await?;
        if !output.success() {
            return Err(TriggerError::CommandFailed {
                exit_code: output.exit_code,
                stderr: output.diagnostic().to_string(),
            });
        }

        tracing::info!("Release builds triggered for {}", branch);
        Ok(())
    }
}

/// Build trigger used when no build command is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipBuildTrigger;

#[async_trait]
impl BuildTrigger for SkipBuildTrigger {
    async fn trigger(&self, branch: &str, _options: TriggerOptions) -> Result<(), TriggerError> {
        tracing::info!("No build command configured; skipping builds for {}", branch);
        Ok(())
    }
}
