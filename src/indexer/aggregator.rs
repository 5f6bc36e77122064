//! Summary pipeline: per-project activity within the activity window.

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::ScanConfig;
use crate::indexer::project_discovery::discover_projects;
use crate::models::{FileSummary, LogFile, ProjectInfo, ProjectSummary};
use crate::parsers::summarize_file;
use crate::utils::{file_age_days, file_modified};

/// Scan all projects and summarize those active within the window
///
/// See [`scan_projects_at`]; this variant measures file ages against the
/// current local time.
pub fn scan_projects(config: &ScanConfig) -> Result<Vec<ProjectSummary>> {
    scan_projects_at(config, Local::now())
}

/// Scan all projects, measuring file ages against `now`
///
/// A file is retained when its age in whole days is at most
/// `activity_window_days` and it holds at least one timestamped record. A
/// project is included when at least one of its files is retained.
///
/// Projects are ordered by latest activity, newest first; projects without
/// any activity instant go last. Files inside a project are ordered by
/// modification time, newest first.
///
/// # Errors
///
/// Only a missing or unreadable projects root is an error. Files whose
/// metadata or contents cannot be read are logged and skipped.
pub fn scan_projects_at(config: &ScanConfig, now: DateTime<Local>) -> Result<Vec<ProjectSummary>> {
    let projects = discover_projects(&config.projects_dir)?;
    let discovered = projects.len();

    let mut summaries: Vec<ProjectSummary> = projects
        .iter()
        .filter_map(|project| summarize_project(project, config.activity_window_days, now))
        .collect();

    // Option orders None first, so a descending sort leaves projects without activity last
    summaries.sort_by(|a, b| b.latest_activity.cmp(&a.latest_activity));

    info!(
        discovered,
        active = summaries.len(),
        window_days = config.activity_window_days,
        "summarized project activity"
    );

    Ok(summaries)
}

fn summarize_project(
    project: &ProjectInfo,
    window_days: u32,
    now: DateTime<Local>,
) -> Option<ProjectSummary> {
    let mut files: Vec<FileSummary> = project
        .log_files
        .iter()
        .filter_map(|log_file| summarize_log_file(log_file, window_days, now))
        .collect();

    if files.is_empty() {
        return None;
    }

    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    Some(ProjectSummary::from_files(project, files))
}

fn summarize_log_file(
    log_file: &LogFile,
    window_days: u32,
    now: DateTime<Local>,
) -> Option<FileSummary> {
    let modified = match file_modified(&log_file.path) {
        Ok(modified) => modified,
        Err(e) => {
            warn!(file = %log_file.path.display(), error = %e, "skipping log file");
            return None;
        }
    };

    let age_days = file_age_days(modified, now);
    if age_days > i64::from(window_days) {
        return None;
    }

    let stats = match summarize_file(&log_file.path) {
        Ok(stats) => stats,
        Err(e) => {
            warn!(file = %log_file.path.display(), error = %e, "skipping log file");
            return None;
        }
    };

    if stats.message_count == 0 {
        return None;
    }

    Some(FileSummary {
        filename: log_file.filename.clone(),
        kind: log_file.kind,
        age_days,
        modified,
        messages: stats.message_count,
        first_ts: stats.first_timestamp,
        last_ts: stats.last_timestamp,
    })
}
