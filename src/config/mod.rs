// ABOUTME: Configuration types and parsing for cutter.yml.
// ABOUTME: Handles YAML parsing, file discovery, and per-channel release settings.

mod deserialize;
mod init;
mod secret;

pub use init::init_config;
pub use secret::{DEFAULT_TOKEN_VAR, SecretValue};

use crate::adapters::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::release::{ReleaseChannel, ReleaseConfig};
use deserialize::{deserialize_command, deserialize_non_blank};
use nonempty::NonEmpty;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "cutter.yml";
pub const CONFIG_FILENAME_ALT: &str = "cutter.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".cutter/config.yml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_non_blank")]
    pub product: String,

    #[serde(deserialize_with = "deserialize_non_blank")]
    pub owner: String,

    #[serde(deserialize_with = "deserialize_non_blank")]
    pub project: String,

    #[serde(default)]
    pub nightly_project: Option<String>,

    #[serde(default = "default_branch")]
    pub default_branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub token: SecretValue,

    pub version: CommandConfig,

    #[serde(default)]
    pub notes: Option<CommandConfig>,

    #[serde(default)]
    pub build: Option<CommandConfig>,
}

/// An external program and its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
    #[serde(deserialize_with = "deserialize_command")]
    pub command: NonEmpty<String>,
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_remote() -> String {
    crate::adapters::DEFAULT_REMOTE.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Path of the first config file present in `dir`.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        [CONFIG_FILENAME, CONFIG_FILENAME_ALT, CONFIG_FILENAME_DIR]
            .into_iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => Err(Error::ConfigNotFound(dir.to_path_buf())),
        }
    }

    /// Host project receiving drafts for `channel`.
    pub fn project_for(&self, channel: ReleaseChannel) -> &str {
        match (channel, &self.nightly_project) {
            (ReleaseChannel::Nightly, Some(nightly)) => nightly,
            _ => &self.project,
        }
    }

    /// Resolve the host token.
    ///
    /// Only runs that contact the host need it.
    pub fn host_token(&self) -> Result<String> {
        self.token.resolve()
    }

    /// Explicit settings for one pipeline run on `channel`.
    pub fn release_config(&self, channel: ReleaseChannel, repo_root: &Path) -> ReleaseConfig {
        let host_token = self.host_token().ok();
        tracing::debug!(
            "Host token from {} ({})",
            self.token.source(),
            if host_token.is_some() { "set" } else { "unset" }
        );

        ReleaseConfig {
            host_token,
            repo_root: repo_root.to_path_buf(),
            product_name: self.product.clone(),
            host_project_name: self.project_for(channel).to_string(),
            default_branch: self.default_branch.clone(),
        }
    }

    pub fn template() -> Self {
        Config {
            product: "my-product".to_string(),
            owner: "my-org".to_string(),
            project: "my-product".to_string(),
            nightly_project: None,
            default_branch: default_branch(),
            remote: default_remote(),
            api_url: default_api_url(),
            token: SecretValue::default(),
            version: CommandConfig {
                command: NonEmpty::from((
                    "python".to_string(),
                    vec!["script/bump-version.py".to_string()],
                )),
            },
            notes: None,
            build: None,
        }
    }
}
