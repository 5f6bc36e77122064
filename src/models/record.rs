use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who authored a record's text payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Other,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other => "other",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One JSON object from a log line, before it is classified.
///
/// Every field is optional and kept as a raw [`Value`] so that foreign shapes
/// (a numeric `type`, a string `message`, a `null` snapshot) never fail decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub record_type: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub snapshot: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// The closed set of record shapes found in a log file
#[derive(Debug, Clone, PartialEq)]
pub enum RecordKind {
    /// A user chat turn (`"type": "user"`)
    User { message: Option<Value> },
    /// An assistant chat turn (`"type": "assistant"`)
    Assistant { message: Option<Value> },
    /// A generic message record (`"type": "message"`), treated as assistant output
    Message { message: Option<Value> },
    /// A `file-history-snapshot` event
    Snapshot,
    /// Any other declared type (`summary`, `system`, ...)
    Other(String),
    /// No usable `type` field
    Untyped,
}

impl RecordKind {
    pub fn role(&self) -> Role {
        match self {
            RecordKind::User { .. } => Role::User,
            RecordKind::Assistant { .. } | RecordKind::Message { .. } => Role::Assistant,
            RecordKind::Snapshot | RecordKind::Other(_) => Role::Other,
            RecordKind::Untyped => Role::Unknown,
        }
    }
}

/// A decoded log line
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// `None` when no timestamp field could be parsed
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub type_tag: Option<String>,
    pub kind: RecordKind,
}

impl Record {
    pub fn role(&self) -> Role {
        self.kind.role()
    }
}
