//! AI Activity Digest - Summarize Claude Code conversation logs
//!
//! This library scans a directory of Claude Code project logs
//! (`~/.claude/projects/<project>/*.jsonl`) and derives two views:
//!
//! - An activity summary: per-project message counts and activity bounds for
//!   files modified within a recent window, a start/last-activity timeline,
//!   and a per-day digest
//! - A flat export: every user and assistant message, newest first
//!
//! Parsing is tolerant: malformed lines, unknown record shapes and
//! unparsable timestamps are skipped rather than failing the run.
//!
//! # Example
//!
//! ```no_run
//! use ai_activity_digest::{ScanConfig, build_activity_report, export_messages};
//!
//! let config = ScanConfig::new("/Users/alice/.claude/projects");
//! let report = build_activity_report(&config)?;
//! println!("{} active projects", report.projects.len());
//!
//! let messages = export_messages(&config)?;
//! println!("{} messages", messages.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::ScanConfig;
pub use indexer::{build_activity_report, build_timeline, export_messages, scan_projects};
pub use models::{ActivityReport, FlatMessageEntry, ProjectSummary, TimelineEntry};
pub use parsers::summarize_file;
pub use utils::project_display_name;
