use std::path::PathBuf;

/// Days of file activity covered by the summary
pub const DEFAULT_ACTIVITY_WINDOW_DAYS: u32 = 7;

/// Characters kept per exported message before truncation
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 10_000;

/// Filenames listed per project in the daily digest
pub const DEFAULT_FILES_PER_PROJECT: usize = 5;

/// Settings shared by the summary and export pipelines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory holding one subdirectory per project
    pub projects_dir: PathBuf,
    /// Summary pipeline: maximum file age in days (inclusive)
    pub activity_window_days: u32,
    /// Export pipeline: maximum file age in days, `None` for no limit
    pub export_horizon_days: Option<u32>,
    pub max_message_chars: usize,
    pub files_per_project: usize,
}

impl ScanConfig {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
            activity_window_days: DEFAULT_ACTIVITY_WINDOW_DAYS,
            export_horizon_days: None,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            files_per_project: DEFAULT_FILES_PER_PROJECT,
        }
    }

    pub fn with_activity_window_days(mut self, days: u32) -> Self {
        self.activity_window_days = days;
        self
    }

    pub fn with_export_horizon_days(mut self, days: Option<u32>) -> Self {
        self.export_horizon_days = days;
        self
    }

    pub fn with_max_message_chars(mut self, chars: usize) -> Self {
        self.max_message_chars = chars;
        self
    }

    pub fn with_files_per_project(mut self, files: usize) -> Self {
        self.files_per_project = files;
        self
    }
}
