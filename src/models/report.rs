use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ProjectSummary, TimelineEntry};

/// Activity of one project on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProject {
    pub name: String,
    pub messages: usize,
    pub files: usize,
    pub latest: DateTime<FixedOffset>,
    /// Newest first, capped at the configured number of files
    pub filenames: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub total_messages: usize,
    pub projects: Vec<DayProject>,
}

impl DailyActivity {
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// Everything the summary pipeline produces for a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    pub generated_at: DateTime<Local>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub window_days: u32,
    pub projects: Vec<ProjectSummary>,
    pub timeline: Vec<TimelineEntry>,
    pub days: Vec<DailyActivity>,
}

impl ActivityReport {
    pub fn total_messages(&self) -> usize {
        self.projects.iter().map(|p| p.total_messages).sum()
    }

    pub fn total_files(&self) -> usize {
        self.projects.iter().map(|p| p.files_count).sum()
    }

    pub fn active_days(&self) -> usize {
        self.days.len()
    }
}
