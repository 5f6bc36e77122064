use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the default projects directory (~/.claude/projects)
pub fn default_projects_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".claude").join("projects"))
}
