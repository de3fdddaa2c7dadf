// ABOUTME: Capability traits for the collaborators the release pipeline drives.
// ABOUTME: Defines SourceControl, VersionResolver, NotesGenerator, ReleaseHost, BuildTrigger, Confirmer.

mod confirm;
mod host;
mod notes;
mod scm;
mod trigger;
mod version;

pub use confirm::Confirmer;
pub use host::{
    ApiSnafu, CreatedRelease, DecodeSnafu, HostError, ReleaseHost, ReleaseSummary, TransportSnafu,
};
pub use notes::{NotesError, NotesGenerator, ReleaseNotes};
pub use scm::{ScmError, SourceControl};
pub use trigger::{BuildTrigger, TriggerError, TriggerOptions};
pub use version::{VersionError, VersionResolver};
