use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

const LOG_FILE_EXTENSION: &str = ".jsonl";
const AGENT_FILE_PREFIX: &str = "agent-";

/// Which naming pattern a log file matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFileKind {
    /// `*.jsonl`
    Session,
    /// `agent-*.jsonl`
    Agent,
}

impl LogFileKind {
    /// Classify a file name, returning `None` for anything that is not a log file.
    ///
    /// Both patterns are resolved from the same name, so a file that matches
    /// `agent-*.jsonl` is never also reported as a plain session file.
    pub fn classify(filename: &str) -> Option<Self> {
        if filename.starts_with('.') || !filename.ends_with(LOG_FILE_EXTENSION) {
            return None;
        }
        if filename.starts_with(AGENT_FILE_PREFIX) {
            Some(LogFileKind::Agent)
        } else {
            Some(LogFileKind::Session)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub filename: String,
    pub kind: LogFileKind,
}

/// A project directory found under the projects root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub dir_name: String,
    pub display_name: String,
    pub project_dir: PathBuf,
    pub log_files: Vec<LogFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub filename: String,
    pub kind: LogFileKind,
    pub age_days: i64,
    pub modified: DateTime<Local>,
    pub messages: usize,
    pub first_ts: Option<DateTime<FixedOffset>>,
    pub last_ts: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub dir_name: String,
    pub path: PathBuf,
    pub total_messages: usize,
    pub files_count: usize,
    pub earliest_activity: Option<DateTime<FixedOffset>>,
    pub latest_activity: Option<DateTime<FixedOffset>>,
    pub files: Vec<FileSummary>,
}

impl ProjectSummary {
    /// Roll file summaries up into project totals
    pub fn from_files(project: &ProjectInfo, files: Vec<FileSummary>) -> Self {
        let total_messages = files.iter().map(|f| f.messages).sum();
        let earliest_activity = files.iter().filter_map(|f| f.first_ts).min();
        let latest_activity = files.iter().filter_map(|f| f.last_ts).max();

        Self {
            name: project.display_name.clone(),
            dir_name: project.dir_name.clone(),
            path: project.project_dir.clone(),
            total_messages,
            files_count: files.len(),
            earliest_activity,
            latest_activity,
            files,
        }
    }
}
