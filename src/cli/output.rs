use std::fmt::Write;

use crate::models::{ActivityReport, FlatMessageEntry};

const SEPARATOR_WIDTH: usize = 80;

/// Console summary of an activity report
pub fn render_summary(report: &ActivityReport, root_label: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "AI Activity Summary");
    let _ = writeln!(out, "===================");
    let _ = writeln!(out, "Projects directory: {}", root_label);
    let _ = writeln!(
        out,
        "Window: {} to {} ({} days)",
        report.window_start, report.window_end, report.window_days
    );
    let _ = writeln!(out, "Active projects: {}", report.projects.len());
    let _ = writeln!(out, "Total messages: {}", report.total_messages());
    let _ = writeln!(out, "Conversation files: {}", report.total_files());
    let _ = writeln!(out, "Active days: {}", report.active_days());
    let _ = writeln!(out, "Timeline entries: {}", report.timeline.len());

    if !report.projects.is_empty() {
        let _ = writeln!(out);
        for project in &report.projects {
            let latest = project
                .latest_activity
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "  {}: {} messages in {} files (last: {})",
                project.name, project.total_messages, project.files_count, latest
            );
        }
    }

    out
}

/// Plain-text layout of the flat export
pub fn render_text_export(entries: &[FlatMessageEntry]) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    for entry in entries {
        let _ = writeln!(out, "[{}] [{}] [{}]", entry.datetime, entry.role, entry.project);
        let _ = writeln!(out, "{}", entry.message);
        let _ = writeln!(out, "{}", separator);
        let _ = writeln!(out);
    }

    out
}
