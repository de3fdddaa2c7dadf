// ABOUTME: Diagnostics accumulator for non-fatal warnings during a release.
// ABOUTME: Collects warnings that shouldn't fail a release but should be shown to operators.

/// Collects non-fatal warnings during release operations.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during a release.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a warning reported by the notes generator.
    pub fn release_notes(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ReleaseNotes,
            message: message.into(),
        }
    }

    /// Create a warning for a version that changed after confirmation.
    pub fn version_changed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::VersionChanged,
            message: message.into(),
        }
    }

    /// Create a warning for release builds that were not started.
    pub fn build_skipped(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::BuildSkipped,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The notes generator flagged something about the notes.
    ReleaseNotes,
    /// The authoritative version differs from the previewed one.
    VersionChanged,
    /// No build command is configured, so builds must be started by hand.
    BuildSkipped,
}
