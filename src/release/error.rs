// ABOUTME: Error types for the release pipeline.
// ABOUTME: Classifies every failure as a guard abort, operator decline, usage or external failure.

use crate::adapters::{HostError, NotesError, ScmError, TriggerError, VersionError};
use crate::types::VersionId;

/// Errors that stop a release.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    /// The last commit is itself a bump commit.
    #[error("There are no new changes to this branch since the last release, aborting release.")]
    NoChanges,

    /// A draft release for this version is already on the host.
    #[error("Aborting because draft release for {0} already exists.")]
    DuplicateDraft(VersionId),

    /// The operator did not confirm the candidate version.
    #[error("Aborting release of {0}")]
    Declined(VersionId),

    /// The confirmation prompt could not be read.
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),

    /// No channel was given for a mode that needs one.
    #[error("a release channel (stable, beta or nightly) is required unless --notes-only is given")]
    MissingChannel,

    #[error("Could not bump version, error was: {0}")]
    Version(#[from] VersionError),

    #[error("Could not generate release notes: {0}")]
    Notes(#[from] NotesError),

    #[error("Could not determine the branch to release: {0}")]
    Branch(#[source] ScmError),

    #[error("Could not read the last commit: {0}")]
    LastCommit(#[source] ScmError),

    #[error("Error tagging {version}: {stderr}")]
    Tag {
        version: VersionId,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Could not get releases. Error was: {0}")]
    ListReleases(#[source] HostError),

    #[error("Error creating new release: {0}")]
    CreateDraft(#[source] HostError),

    #[error("Error pushing the release: {stderr}")]
    Push {
        branch: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Tag or push could not even be attempted.
    #[error("source control failure: {0}")]
    Scm(#[from] ScmError),

    #[error("Could not trigger release builds: {0}")]
    Trigger(#[from] TriggerError),
}

/// Error categories for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseErrorKind {
    /// A guard found nothing to do or work already done.
    GuardAbort,
    /// The operator declined the release.
    OperatorDecline,
    /// Invalid invocation, detected before any stage runs.
    UsageError,
    /// A collaborator call failed.
    ExternalCallFailure,
}

impl ReleaseError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ReleaseErrorKind {
        match self {
            ReleaseError::NoChanges | ReleaseError::DuplicateDraft(_) => {
                ReleaseErrorKind::GuardAbort
            }
            ReleaseError::Declined(_) => ReleaseErrorKind::OperatorDecline,
            ReleaseError::MissingChannel => ReleaseErrorKind::UsageError,
            ReleaseError::Prompt(_)
            | ReleaseError::Version(_)
            | ReleaseError::Notes(_)
            | ReleaseError::Branch(_)
            | ReleaseError::LastCommit(_)
            | ReleaseError::Tag { .. }
            | ReleaseError::ListReleases(_)
            | ReleaseError::CreateDraft(_)
            | ReleaseError::Push { .. }
            | ReleaseError::Scm(_)
            | ReleaseError::Trigger(_) => ReleaseErrorKind::ExternalCallFailure,
        }
    }

    /// Whether the run ended on purpose rather than because something broke.
    pub fn is_expected(&self) -> bool {
        matches!(
            self.kind(),
            ReleaseErrorKind::GuardAbort | ReleaseErrorKind::OperatorDecline
        )
    }
}
