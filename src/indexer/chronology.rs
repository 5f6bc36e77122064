use crate::models::{ProjectSummary, TimelineEntry, TimelineEventKind};

/// Flatten project file summaries into a timeline, newest first
///
/// Each file contributes a `conversation_start` marker at its first timestamp
/// and a `last_activity` marker at its last one, so a project with F files
/// yields at most 2×F entries no matter how many messages they hold.
pub fn build_timeline(projects: &[ProjectSummary]) -> Vec<TimelineEntry> {
    let mut timeline = Vec::new();

    for project in projects {
        for file in &project.files {
            let markers = [
                (file.first_ts, TimelineEventKind::ConversationStart),
                (file.last_ts, TimelineEventKind::LastActivity),
            ];
            for (timestamp, kind) in markers {
                if let Some(timestamp) = timestamp {
                    timeline.push(TimelineEntry {
                        timestamp,
                        project: project.name.clone(),
                        filename: file.filename.clone(),
                        kind,
                        messages: file.messages,
                    });
                }
            }
        }
    }

    timeline.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    timeline
}
