//! Aggregation pipelines over a projects directory
//!
//! # Error Handling Strategy
//!
//! Both pipelines skip and continue at the smallest granularity possible:
//!
//! - **Root-level failures**: a missing or unreadable projects root is the only
//!   fatal condition and is returned as an error.
//!
//! - **Project-level failures**: a project directory that cannot be listed is
//!   logged with `tracing::warn!` and left out.
//!
//! - **File-level failures**: a file whose metadata or contents cannot be read
//!   is logged and skipped; the rest of the project is still scanned.
//!
//! - **Line-level failures**: delegated to `parsers`, which skips malformed lines.
//!
//! The summary pipeline ([`build_activity_report`]) runs
//! discovery → [`aggregator`] → [`chronology`] → [`digest`]. The detail
//! pipeline ([`export_messages`]) runs discovery → [`exporter`].

pub mod aggregator;
pub mod chronology;
pub mod digest;
pub mod exporter;
pub mod project_discovery;
pub mod report;

pub use aggregator::{scan_projects, scan_projects_at};
pub use chronology::build_timeline;
pub use digest::build_daily_digest;
pub use exporter::{export_messages, export_messages_at, export_projects, messages_per_day};
pub use project_discovery::discover_projects;
pub use report::{build_activity_report, build_activity_report_at};
