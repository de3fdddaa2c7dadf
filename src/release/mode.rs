// ABOUTME: Pipeline modes selecting which stages of a release run.
// ABOUTME: Dry run and notes-only reuse the preview stages of a full release.

/// Which path through the pipeline an invocation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMode {
    /// Preview the next version and print it. No side effects.
    DryRun,
    /// Preview the version and print the release notes for it.
    NotesOnly,
    /// Tag, draft, push and trigger builds.
    FullRelease,
}

impl PipelineMode {
    /// Select the mode from invocation flags. A dry run wins over notes-only.
    pub fn from_flags(dry_run: bool, notes_only: bool) -> Self {
        if dry_run {
            PipelineMode::DryRun
        } else if notes_only {
            PipelineMode::NotesOnly
        } else {
            PipelineMode::FullRelease
        }
    }

    /// Whether this mode creates tags, drafts, or pushes.
    pub fn has_side_effects(&self) -> bool {
        matches!(self, PipelineMode::FullRelease)
    }
}
