use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::Role;
use crate::parsers::timestamps::format_export_datetime;

/// One message in the flat export
///
/// `timestamp` is the UTC instant with its offset dropped and is the sort key;
/// `datetime` is its rendered form and is what gets serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatMessageEntry {
    #[serde(skip)]
    pub timestamp: NaiveDateTime,
    pub datetime: String,
    pub date: String,
    pub time: String,
    pub project: String,
    pub role: Role,
    pub message: String,
}

impl FlatMessageEntry {
    pub fn new(timestamp: NaiveDateTime, project: &str, role: Role, message: String) -> Self {
        Self {
            timestamp,
            datetime: format_export_datetime(&timestamp),
            date: timestamp.format("%Y-%m-%d").to_string(),
            time: timestamp.format("%H:%M").to_string(),
            project: project.to_string(),
            role,
            message,
        }
    }
}
