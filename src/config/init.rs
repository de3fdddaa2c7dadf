// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates cutter.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(
    dir: &Path,
    product: Option<&str>,
    owner: Option<&str>,
    force: bool,
) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();

    if let Some(p) = product {
        let p = p.trim();
        if p.is_empty() {
            return Err(Error::InvalidConfig("product cannot be blank".to_string()));
        }
        config.product = p.to_string();
        config.project = p.to_string();
    }

    if let Some(o) = owner {
        let o = o.trim();
        if o.is_empty() {
            return Err(Error::InvalidConfig("owner cannot be blank".to_string()));
        }
        config.owner = o.to_string();
    }

    let yaml = generate_template_yaml(&config);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"product: {}
owner: {}
project: {}
# Project receiving nightly drafts (defaults to `project`)
# nightly_project: nightlies
default_branch: {}
token:
  env: GITHUB_TOKEN
version:
  # Called with `--bump <channel>`, plus `--dry-run` when previewing
  command: [{}]
# notes:
#   command: [node, script/release-notes.js]
# build:
#   command: [node, script/ci-release-build.js]
"#,
        config.product,
        config.owner,
        config.project,
        config.default_branch,
        config.version.command.iter().cloned().collect::<Vec<_>>().join(", ")
    )
}
