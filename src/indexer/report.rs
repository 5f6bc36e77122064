use anyhow::Result;
use chrono::{DateTime, Duration, Local};

use crate::config::ScanConfig;
use crate::indexer::aggregator::scan_projects_at;
use crate::indexer::chronology::build_timeline;
use crate::indexer::digest::build_daily_digest;
use crate::models::ActivityReport;

/// Run the whole summary pipeline against the current time
pub fn build_activity_report(config: &ScanConfig) -> Result<ActivityReport> {
    build_activity_report_at(config, Local::now())
}

/// Run the summary pipeline: projects, then chronology, then daily digest
pub fn build_activity_report_at(
    config: &ScanConfig,
    now: DateTime<Local>,
) -> Result<ActivityReport> {
    let projects = scan_projects_at(config, now)?;
    let timeline = build_timeline(&projects);
    let days = build_daily_digest(&timeline, config.files_per_project);

    Ok(ActivityReport {
        generated_at: now,
        window_start: now.date_naive() - Duration::days(i64::from(config.activity_window_days)),
        window_end: now.date_naive(),
        window_days: config.activity_window_days,
        projects,
        timeline,
        days,
    })
}
