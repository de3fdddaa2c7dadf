// ABOUTME: Application-wide error types for cutter.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::release::{ReleaseError, ReleaseErrorKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Release(e) if e.kind() == ReleaseErrorKind::UsageError => 2,
            _ => 1,
        }
    }

    /// True for aborts that are reported without the error prefix.
    pub fn is_expected(&self) -> bool {
        matches!(self, Error::Release(e) if e.is_expected())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
