//! JSONL log parsing
//!
//! # Error Handling Strategy
//!
//! Parsing degrades gracefully, at the smallest possible granularity:
//!
//! - **Malformed lines**: a line that is not a JSON object is counted in
//!   [`LineStats::skipped_lines`], logged at debug level and skipped.
//!
//! - **Unparsable timestamps**: the record is kept but its timestamp is `None`,
//!   which excludes it from every time-based statistic.
//!
//! - **I/O failures**: opening or reading a file returns an `anyhow` error with
//!   context. Callers in `indexer` skip that file and carry on.

pub mod record;
pub mod scanner;
pub mod timestamps;

pub use record::{decode_record, extract_message_content};
pub use scanner::{FileStats, LineStats, scan_records, summarize_file};
pub use timestamps::{TimestampError, normalize_timestamp, parse_timestamp};
