// ABOUTME: Release orchestration using the type state pattern.
// ABOUTME: Exports channels, guards, state markers and the orchestrator.

mod channel;
mod draft;
mod error;
mod guard;
mod mode;
mod pipeline;
mod release;
mod state;
mod transitions;

pub use channel::{
    NIGHTLY_NOTES, NotesPolicy, ReleaseChannel, ReleaseConfig, ReleaseSettings, UnknownChannel,
};
pub use draft::DraftRelease;
pub use error::{ReleaseError, ReleaseErrorKind};
pub use guard::{find_duplicate_draft, is_bump_commit};
pub use mode::PipelineMode;
pub use pipeline::{Collaborators, Invocation, Orchestrator, Outcome, select_channel};
pub use release::{Release, ReleaseReport};
pub use state::{
    Completed, Confirmed, Drafted, HasVersion, Planned, Prepared, Pushed, Tagged, Verified,
};
pub use transitions::notes_for;
