use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DailyActivity, DayProject, TimelineEntry};

/// Group a timeline by calendar day and project
///
/// Days are keyed by the date of each entry in its own offset and returned
/// newest first; projects inside a day are sorted by name. A file that both
/// starts and ends on the same day is counted once. `files_per_project` caps
/// the filenames listed per project (newest first).
pub fn build_daily_digest(
    timeline: &[TimelineEntry],
    files_per_project: usize,
) -> Vec<DailyActivity> {
    let mut by_day: BTreeMap<NaiveDate, BTreeMap<&str, Vec<&TimelineEntry>>> = BTreeMap::new();
    for entry in timeline {
        by_day
            .entry(entry.timestamp.date_naive())
            .or_default()
            .entry(entry.project.as_str())
            .or_default()
            .push(entry);
    }

    by_day
        .into_iter()
        .rev()
        .map(|(date, projects)| {
            let projects: Vec<DayProject> = projects
                .into_iter()
                .map(|(name, entries)| day_project(name, entries, files_per_project))
                .collect();
            DailyActivity {
                date,
                total_messages: projects.iter().map(|p| p.messages).sum(),
                projects,
            }
        })
        .collect()
}

fn day_project(
    name: &str,
    mut entries: Vec<&TimelineEntry>,
    files_per_project: usize,
) -> DayProject {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    // Newest entry per file comes first after the sort
    let mut filenames: Vec<&str> = Vec::new();
    let mut messages = 0;
    for entry in &entries {
        if !filenames.contains(&entry.filename.as_str()) {
            filenames.push(&entry.filename);
            messages += entry.messages;
        }
    }

    DayProject {
        name: name.to_string(),
        messages,
        files: filenames.len(),
        latest: entries[0].timestamp,
        filenames: filenames.iter().take(files_per_project).map(|f| f.to_string()).collect(),
    }
}
