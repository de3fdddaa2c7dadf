// ABOUTME: Validated domain types shared by the pipeline and its adapters.
// ABOUTME: Version identifiers and host-side release ids.

mod release_id;
mod version_id;

pub use release_id::ReleaseId;
pub use version_id::{VersionId, VersionIdError};
