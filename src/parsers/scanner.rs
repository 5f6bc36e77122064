use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::models::Record;
use crate::parsers::record::decode_record;

/// Line counters for one scanned file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Non-blank lines seen
    pub total_lines: usize,
    /// Lines that were not a decodable JSON object
    pub skipped_lines: usize,
}

/// Per-file statistics for the summary pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStats {
    pub message_count: usize,
    pub first_timestamp: Option<DateTime<FixedOffset>>,
    pub last_timestamp: Option<DateTime<FixedOffset>>,
    pub lines: LineStats,
}

impl FileStats {
    fn observe(&mut self, timestamp: DateTime<FixedOffset>) {
        self.message_count += 1;
        if self.first_timestamp.is_none_or(|first| timestamp < first) {
            self.first_timestamp = Some(timestamp);
        }
        if self.last_timestamp.is_none_or(|last| timestamp > last) {
            self.last_timestamp = Some(timestamp);
        }
    }
}

/// Stream every decodable record of a JSONL file into `visit`
///
/// Lines are read one at a time and decoded as lossy UTF-8. Blank lines are
/// ignored; lines that fail to decode are counted and skipped. Only I/O
/// failures (opening or reading the file) are returned as errors.
pub fn scan_records<F>(path: &Path, mut visit: F) -> Result<LineStats>
where
    F: FnMut(Record),
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut stats = LineStats::default();
    let mut line_num = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line from {}", path.display()))?;
        if read == 0 {
            break;
        }
        line_num += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.total_lines += 1;

        match decode_record(line) {
            Ok(record) => visit(record),
            Err(e) => {
                stats.skipped_lines += 1;
                debug!(
                    path = %path.display(),
                    line = line_num,
                    error = %e,
                    "skipping malformed line"
                );
            }
        }
    }

    if stats.skipped_lines > 0 {
        debug!(
            path = %path.display(),
            total = stats.total_lines,
            skipped = stats.skipped_lines,
            "scanned log file with malformed lines"
        );
    }

    Ok(stats)
}

/// Count timestamped records and track their earliest and latest instants
///
/// Any record type counts as long as it carries a parsable timestamp.
pub fn summarize_file(path: &Path) -> Result<FileStats> {
    let mut stats = FileStats::default();
    let lines = scan_records(path, |record| {
        if let Some(timestamp) = record.timestamp {
            stats.observe(timestamp);
        }
    })?;
    stats.lines = lines;
    Ok(stats)
}
