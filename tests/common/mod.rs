//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test projects directories
pub struct ProjectsDirBuilder {
    temp_dir: TempDir,
}

impl ProjectsDirBuilder {
    /// Create a new builder with an empty projects directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the projects directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given directory name and log files
    pub fn with_project(self, dir_name: &str, log_files: &[LogFileBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join(dir_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for log_file in log_files {
            log_file.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ProjectsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one JSONL log file
pub struct LogFileBuilder {
    filename: String,
    lines: Vec<String>,
    age: Option<Duration>,
}

impl LogFileBuilder {
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new(), age: None }
    }

    /// Add a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Backdate the file's modification time
    pub fn aged(mut self, age: Duration) -> Self {
        self.age = Some(age);
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let file_path = dir.join(&self.filename);
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(&file_path, content).expect("Failed to write log file");

        if let Some(age) = self.age {
            let modified = SystemTime::now() - age;
            filetime::set_file_mtime(&file_path, FileTime::from_system_time(modified))
                .expect("Failed to set mtime");
        }

        file_path
    }
}

/// Builder for a single log record
pub struct RecordBuilder {
    record_type: Option<String>,
    timestamp: Option<Value>,
    snapshot_timestamp: Option<String>,
    message: Option<Value>,
}

impl RecordBuilder {
    /// A user turn with plain string content
    pub fn user(text: &str) -> Self {
        Self {
            record_type: Some("user".to_string()),
            timestamp: Some(json!("2024-01-01T10:00:00Z")),
            snapshot_timestamp: None,
            message: Some(json!({"role": "user", "content": text})),
        }
    }

    /// An assistant turn with a single text block
    pub fn assistant(text: &str) -> Self {
        Self {
            record_type: Some("assistant".to_string()),
            timestamp: Some(json!("2024-01-01T10:00:01Z")),
            snapshot_timestamp: None,
            message: Some(json!({
                "role": "assistant",
                "content": [{"type": "text", "text": text}],
            })),
        }
    }

    /// A file-history snapshot event carrying its timestamp inside `snapshot`
    pub fn snapshot(ts: &str) -> Self {
        Self {
            record_type: Some("file-history-snapshot".to_string()),
            timestamp: None,
            snapshot_timestamp: Some(ts.to_string()),
            message: None,
        }
    }

    /// A record of an arbitrary type with no message
    pub fn of_type(record_type: &str) -> Self {
        Self {
            record_type: Some(record_type.to_string()),
            timestamp: Some(json!("2024-01-01T10:00:00Z")),
            snapshot_timestamp: None,
            message: None,
        }
    }

    pub fn timestamp(mut self, ts: &str) -> Self {
        self.timestamp = Some(json!(ts));
        self
    }

    /// Epoch milliseconds instead of a string
    pub fn timestamp_millis(mut self, ms: i64) -> Self {
        self.timestamp = Some(json!(ms));
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    /// Replace the message content with arbitrary JSON
    pub fn content(mut self, content: Value) -> Self {
        self.message = Some(json!({"content": content}));
        self
    }

    pub fn to_json(&self) -> String {
        let mut record = serde_json::Map::new();
        if let Some(record_type) = &self.record_type {
            record.insert("type".to_string(), json!(record_type));
        }
        if let Some(timestamp) = &self.timestamp {
            record.insert("timestamp".to_string(), timestamp.clone());
        }
        if let Some(ts) = &self.snapshot_timestamp {
            record.insert(
                "snapshot".to_string(),
                json!({"messageId": "m1", "trackedFileBackups": {}, "timestamp": ts}),
            );
        }
        if let Some(message) = &self.message {
            record.insert("message".to_string(), message.clone());
        }
        Value::Object(record).to_string()
    }
}

/// A conversation file with `count` user messages an hour apart, starting at 2024-01-01T00:00Z
pub fn conversation_file(filename: &str, count: usize) -> LogFileBuilder {
    (0..count).fold(LogFileBuilder::new(filename), |file, i| {
        file.with_record(
            RecordBuilder::user(&format!("message {}", i))
                .timestamp(&format!("2024-01-01T{:02}:00:00Z", i % 24)),
        )
    })
}

/// Helper to create a realistic projects directory with sample data
pub fn realistic_projects_dir() -> TempDir {
    let demo = LogFileBuilder::new("session-1.jsonl")
        .with_record(RecordBuilder::snapshot("2024-01-01T09:59:00Z"))
        .with_record(RecordBuilder::user("Hello from demo").timestamp("2024-01-01T10:00:00Z"))
        .with_record(RecordBuilder::assistant("Hi there").timestamp("2024-01-01T12:00:00Z"));
    let session = LogFileBuilder::new("session-2.jsonl")
        .with_record(RecordBuilder::user("Deploy it").timestamp("2024-01-03T08:00:00Z"));
    let agent = LogFileBuilder::new("agent-abc.jsonl")
        .with_record(RecordBuilder::assistant("Deployed").timestamp("2024-01-03T08:05:00Z"));

    ProjectsDirBuilder::new()
        .with_project("-Users-larry-demo-project", &[demo])
        .with_project("-Users-larry-api-server", &[session, agent])
        .with_project(".hidden", &[conversation_file("s.jsonl", 3)])
        .build()
}
