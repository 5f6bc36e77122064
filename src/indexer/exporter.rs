//! Detail pipeline: every message with text, flattened and sorted newest first.
//!
//! Unlike the summary pipeline there is no minimum-message gate and, unless
//! `export_horizon_days` is set, no age limit. Timestamps are converted to UTC
//! and stripped of their offset before sorting, so entries from files written
//! in different zones interleave chronologically.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::ScanConfig;
use crate::indexer::project_discovery::discover_projects;
use crate::models::{FlatMessageEntry, LogFile, ProjectInfo};
use crate::parsers::extract_message_content;
use crate::parsers::scanner::scan_records;
use crate::parsers::timestamps::strip_offset;
use crate::utils::{file_age_days, file_modified};

/// Appended to messages cut at the character cap
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// Export every message under the projects root, newest first
pub fn export_messages(config: &ScanConfig) -> Result<Vec<FlatMessageEntry>> {
    export_messages_at(config, Local::now())
}

/// Export every message, measuring the optional horizon against `now`
///
/// # Errors
///
/// Only a missing or unreadable projects root is an error; unreadable files
/// are logged and skipped.
pub fn export_messages_at(
    config: &ScanConfig,
    now: DateTime<Local>,
) -> Result<Vec<FlatMessageEntry>> {
    let projects = discover_projects(&config.projects_dir)?;
    Ok(export_projects(&projects, config, now))
}

/// Export the messages of already discovered projects, newest first
///
/// Files that cannot be read are logged and skipped.
pub fn export_projects(
    projects: &[ProjectInfo],
    config: &ScanConfig,
    now: DateTime<Local>,
) -> Vec<FlatMessageEntry> {
    let mut entries = Vec::new();
    let mut files_scanned = 0usize;
    let mut files_failed = 0usize;

    for project in projects {
        for log_file in &project.log_files {
            if let Some(horizon) = config.export_horizon_days {
                match within_horizon(log_file, horizon, now) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        files_failed += 1;
                        warn!(file = %log_file.path.display(), error = %e, "skipping log file");
                        continue;
                    }
                }
            }

            match extract_file_messages(
                &log_file.path,
                &project.display_name,
                config.max_message_chars,
            ) {
                Ok(mut file_entries) => {
                    files_scanned += 1;
                    entries.append(&mut file_entries);
                }
                Err(e) => {
                    files_failed += 1;
                    warn!(file = %log_file.path.display(), error = %e, "skipping log file");
                }
            }
        }
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    info!(
        entries = entries.len(),
        files_scanned, files_failed, "exported conversation messages"
    );

    entries
}

fn within_horizon(log_file: &LogFile, horizon_days: u32, now: DateTime<Local>) -> Result<bool> {
    let modified = file_modified(&log_file.path)?;
    Ok(file_age_days(modified, now) <= i64::from(horizon_days))
}

/// Extract the messages of one log file, in file order
///
/// A record yields an entry when it has a timestamp, an author role and
/// non-empty text after trimming.
pub fn extract_file_messages(
    path: &Path,
    project: &str,
    max_chars: usize,
) -> Result<Vec<FlatMessageEntry>> {
    let mut entries = Vec::new();

    scan_records(path, |record| {
        let Some(timestamp) = record.timestamp else {
            return;
        };
        let (content, role) = extract_message_content(&record);
        let Some(role) = role else {
            return;
        };
        let content = content.trim();
        if content.is_empty() {
            return;
        }

        entries.push(FlatMessageEntry::new(
            strip_offset(&timestamp),
            project,
            role,
            truncate_message(content, max_chars),
        ));
    })?;

    Ok(entries)
}

/// Cut `text` to `max_chars` characters, appending [`TRUNCATION_MARKER`] when cut
pub fn truncate_message(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Message counts per calendar date, most recent date first
pub fn messages_per_day(entries: &[FlatMessageEntry]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.date.as_str()).or_default() += 1;
    }
    counts.into_iter().rev().map(|(date, count)| (date.to_string(), count)).collect()
}
