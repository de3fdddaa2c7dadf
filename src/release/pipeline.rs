// ABOUTME: Release orchestrator: mode dispatch and the full release sequence.
// ABOUTME: Runs guards and stages in order and stops at the first failure.

use crate::adapters::{
    AutoConfirmer, BuildTrigger, Confirmer, NotesGenerator, ReleaseHost, ReleaseNotes,
    SourceControl, VersionResolver,
};
use crate::diagnostics::{Diagnostics, Warning};
use crate::output::Output;
use crate::types::VersionId;

use super::channel::{ReleaseChannel, ReleaseConfig, ReleaseSettings};
use super::error::ReleaseError;
use super::guard::is_bump_commit;
use super::mode::PipelineMode;
use super::release::{Release, ReleaseReport};
use super::transitions::notes_for;

/// The collaborators a release is driven through.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub version: &'a dyn VersionResolver,
    pub notes: &'a dyn NotesGenerator,
    pub scm: &'a dyn SourceControl,
    pub host: &'a dyn ReleaseHost,
    pub trigger: &'a dyn BuildTrigger,
    pub confirmer: &'a dyn Confirmer,
}

/// One invocation of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub channel: ReleaseChannel,
    pub mode: PipelineMode,
    /// Flag the draft as a prerelease and add install guidance to its body.
    pub is_beta: bool,
    /// Branch to release instead of the checked out one.
    pub branch: Option<String>,
    /// Skip the confirmation prompt and tell the build system the release is unattended.
    pub automatic: bool,
}

/// Pick the channel for a run.
///
/// Notes-only runs fall back to the stable channel; every other mode needs
/// an explicit channel.
pub fn select_channel(
    channel: Option<ReleaseChannel>,
    mode: PipelineMode,
) -> Result<ReleaseChannel, ReleaseError> {
    match (channel, mode) {
        (Some(channel), _) => Ok(channel),
        (None, PipelineMode::NotesOnly) => Ok(ReleaseChannel::Stable),
        (None, PipelineMode::DryRun | PipelineMode::FullRelease) => {
            Err(ReleaseError::MissingChannel)
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry run: the previewed next version.
    Version(VersionId),
    /// Notes-only: the previewed version and its notes.
    Notes {
        version: VersionId,
        notes: ReleaseNotes,
    },
    /// Full release.
    Released(ReleaseReport),
}

/// Sequences the release stages and enforces their guards.
pub struct Orchestrator<'a> {
    config: ReleaseConfig,
    collab: Collaborators<'a>,
    output: &'a Output,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: ReleaseConfig, collab: Collaborators<'a>, output: &'a Output) -> Self {
        Self {
            config,
            collab,
            output,
        }
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    /// Run the path selected by `invocation.mode`.
    ///
    /// Non-fatal warnings are collected in `diag`.
    pub async fn run(
        &self,
        invocation: &Invocation,
        diag: &mut Diagnostics,
    ) -> Result<Outcome, ReleaseError> {
        let settings = ReleaseSettings::new(invocation.channel, invocation.is_beta, &self.config);
        tracing::debug!(?settings, mode = ?invocation.mode, "Release settings");

        match invocation.mode {
            PipelineMode::DryRun => {
                let version = self.collab.version.resolve(settings.channel, true).await?;
                Ok(Outcome::Version(version))
            }
            PipelineMode::NotesOnly => {
                let branch = self.resolve_branch(invocation).await?;
                let version = self.collab.version.resolve(settings.channel, true).await?;
                let notes = notes_for(&settings, self.collab.notes, &branch, &version).await?;
                surface_notes_warning(&notes, diag);
                Ok(Outcome::Notes { version, notes })
            }
            PipelineMode::FullRelease => self
                .full_release(settings, invocation, diag)
                .await
                .map(Outcome::Released),
        }
    }

    /// Branch override from the invocation, or the checked out branch.
    async fn resolve_branch(&self, invocation: &Invocation) -> Result<String, ReleaseError> {
        if let Some(branch) = &invocation.branch {
            return Ok(branch.clone());
        }

        self.collab
            .scm
            .current_branch()
            .await
            .map_err(ReleaseError::Branch)
    }

    /// Abort when the last commit is a bump commit: nothing new to release.
    async fn check_for_changes(&self) -> Result<(), ReleaseError> {
        let subject = self
            .collab
            .scm
            .last_commit_subject()
            .await
            .map_err(ReleaseError::LastCommit)?;

        tracing::debug!("Last commit subject: {}", subject);
        if is_bump_commit(&subject) {
            return Err(ReleaseError::NoChanges);
        }
        Ok(())
    }

    async fn full_release(
        &self,
        settings: ReleaseSettings,
        invocation: &Invocation,
        diag: &mut Diagnostics,
    ) -> Result<ReleaseReport, ReleaseError> {
        let collab = &self.collab;
        let output = self.output;

        let branch = self.resolve_branch(invocation).await?;
        self.check_for_changes().await?;

        let release = Release::new(settings, branch);
        let release = if invocation.automatic {
            release.confirm(collab.version, &AutoConfirmer).await?
        } else {
            release.confirm(collab.version, collab.confirmer).await?
        };
        let candidate = release.state().candidate().clone();
        output.pass(&format!("Starting release of {candidate}"));

        output.progress(&format!(
            "Bumping for new \"{}\" version.",
            release.channel()
        ));
        let release = release.prepare(collab.version, collab.notes).await?;
        output.pass(&format!(
            "Successfully bumped version to {}",
            release.version()
        ));
        if release.version() != &candidate {
            diag.warn(Warning::version_changed(format!(
                "released version {} differs from confirmed version {}",
                release.version(),
                candidate
            )));
        }
        surface_notes_warning(release.notes(), diag);

        output.progress(&format!("Tagging release {}.", release.version()));
        let release = release.tag(collab.scm).await?;
        output.pass(&format!("Successfully tagged {}.", release.version()));

        output.progress("Checking for existing draft release.");
        let release = release.check_for_draft(collab.host).await?;
        output.pass("A draft release does not exist; creating one.");

        let release = release.create_draft(collab.host).await?;
        output.progress(&format!(
            "Release has been created with id: {}.",
            release.release_id()
        ));
        output.pass(&format!("Draft release for {} successful.", release.version()));

        let release = release.push(collab.scm).await?;
        output.pass(
            "Successfully pushed the release.  Wait for release builds to finish before publishing.",
        );

        let release = release
            .trigger_builds(collab.trigger, invocation.automatic)
            .await?;
        output.pass(&format!("Release builds triggered for {}.", release.branch()));

        Ok(release.finish())
    }
}

fn surface_notes_warning(notes: &ReleaseNotes, diag: &mut Diagnostics) {
    if let Some(warning) = &notes.warning {
        diag.warn(Warning::release_notes(warning.clone()));
    }
}
