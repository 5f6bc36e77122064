use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    ConversationStart,
    LastActivity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: DateTime<FixedOffset>,
    pub project: String,
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    pub messages: usize,
}
