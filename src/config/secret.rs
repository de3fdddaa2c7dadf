// ABOUTME: Secret values given literally or by environment variable reference.
// ABOUTME: Resolves the release host token without echoing it in debug output.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Environment variable holding the host token unless configured otherwise.
pub const DEFAULT_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SecretValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
    },
}

impl SecretValue {
    pub fn from_env(var: impl Into<String>) -> Self {
        SecretValue::FromEnv { var: var.into() }
    }

    /// Resolve the secret, reading the environment when it is a reference.
    ///
    /// An empty variable counts as missing.
    pub fn resolve(&self) -> Result<String> {
        match self {
            SecretValue::Literal(s) => Ok(s.clone()),
            SecretValue::FromEnv { var } => match std::env::var(var) {
                Ok(val) if !val.trim().is_empty() => Ok(val),
                _ => Err(Error::MissingEnvVar(var.clone())),
            },
        }
    }

    /// Where the secret comes from, safe to log.
    pub fn source(&self) -> String {
        match self {
            SecretValue::Literal(_) => "literal value in config".to_string(),
            SecretValue::FromEnv { var } => format!("${var}"),
        }
    }
}

impl Default for SecretValue {
    fn default() -> Self {
        SecretValue::from_env(DEFAULT_TOKEN_VAR)
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretValue::Literal(_) => f.write_str("SecretValue::Literal(<redacted>)"),
            SecretValue::FromEnv { var } => write!(f, "SecretValue::FromEnv({var})"),
        }
    }
}
