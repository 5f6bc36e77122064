//! Data models for the activity digest.
//!
//! - [`Record`] - One decoded log line, classified by [`RecordKind`]
//! - [`ProjectInfo`] - A discovered project directory and its log files
//! - [`ProjectSummary`] / [`FileSummary`] - Summary pipeline output
//! - [`TimelineEntry`] - Start/last-activity markers of the chronology
//! - [`FlatMessageEntry`] - One message of the flat export
//! - [`ActivityReport`] / [`DailyActivity`] - The assembled summary handed to renderers
//!
//! All of these are plain serializable data; the logic lives in `parsers` and `indexer`.

pub mod export;
pub mod project;
pub mod record;
pub mod report;
pub mod timeline;

pub use export::FlatMessageEntry;
pub use project::{FileSummary, LogFile, LogFileKind, ProjectInfo, ProjectSummary};
pub use record::{RawRecord, Record, RecordKind, Role};
pub use report::{ActivityReport, DailyActivity, DayProject};
pub use timeline::{TimelineEntry, TimelineEventKind};
