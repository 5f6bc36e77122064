use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::warn;
use walkdir::WalkDir;

use crate::models::{LogFile, LogFileKind, ProjectInfo};
use crate::utils::project_display_name;

/// Discover all project directories under the projects root and their log files
///
/// Hidden directories (names starting with `.`) and plain files at the top
/// level are ignored. Projects come back ordered by directory name.
///
/// # Errors
///
/// Returns an error if the projects root does not exist or cannot be listed.
/// A project directory whose contents cannot be listed is logged and skipped.
pub fn discover_projects(projects_dir: &Path) -> Result<Vec<ProjectInfo>> {
    if !projects_dir.is_dir() {
        bail!("Projects directory not found: {}", projects_dir.display());
    }

    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().into_owned();
        if dir_name.starts_with('.') {
            continue;
        }

        let log_files = match list_log_files(&path) {
            Ok(files) => files,
            Err(e) => {
                warn!(project = %dir_name, error = %e, "skipping unreadable project directory");
                continue;
            }
        };

        projects.push(ProjectInfo {
            display_name: project_display_name(&dir_name),
            dir_name,
            project_dir: path,
            log_files,
        });
    }

    projects.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(projects)
}

/// List the `*.jsonl` and `agent-*.jsonl` files directly inside a project directory
///
/// The two patterns overlap (every agent file is also a `.jsonl` file); each
/// file is reported once, keyed by filename, with the more specific kind.
/// Symlinks are not followed.
pub fn list_log_files(project_dir: &Path) -> Result<Vec<LogFile>> {
    let mut files: BTreeMap<String, LogFile> = BTreeMap::new();

    for entry in WalkDir::new(project_dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read project directory: {}", project_dir.display())
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable file entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some(kind) = LogFileKind::classify(&filename) else {
            continue;
        };
        files.entry(filename.clone()).or_insert_with(|| LogFile {
            path: entry.into_path(),
            filename,
            kind,
        });
    }

    Ok(files.into_values().collect())
}
