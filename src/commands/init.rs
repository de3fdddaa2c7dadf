// ABOUTME: Init command implementation.
// ABOUTME: Writes a starter cutter.yml into the repository root.

use cutter::config::{self, CONFIG_FILENAME};
use cutter::error::Result;
use cutter::output::Output;
use std::path::Path;

pub fn init(
    repo_root: &Path,
    product: Option<&str>,
    owner: Option<&str>,
    force: bool,
    output: &Output,
) -> Result<()> {
    config::init_config(repo_root, product, owner, force)?;
    output.success(&format!(
        "Created {}",
        repo_root.join(CONFIG_FILENAME).display()
    ));
    Ok(())
}
