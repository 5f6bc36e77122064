use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::{RawRecord, Record, RecordKind, Role};
use crate::parsers::timestamps::timestamp_from_value;

const TYPE_USER: &str = "user";
const TYPE_ASSISTANT: &str = "assistant";
const TYPE_MESSAGE: &str = "message";
const TYPE_SNAPSHOT: &str = "file-history-snapshot";
const CONTENT_TYPE_TEXT: &str = "text";

/// Decode one non-blank log line into a [`Record`]
///
/// Fails only when the line is not a JSON object. Missing or oddly shaped
/// fields never fail; they classify as [`RecordKind::Untyped`] or leave the
/// timestamp empty.
pub fn decode_record(line: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(line).context("invalid JSON")?;
    if !value.is_object() {
        bail!("expected a JSON object, found {}", json_kind(&value));
    }
    let raw: RawRecord = serde_json::from_value(value).context("unexpected record shape")?;
    Ok(classify_record(raw))
}

/// Turn a raw record into its tagged form, resolving the timestamp
pub fn classify_record(raw: RawRecord) -> Record {
    let timestamp = select_timestamp(&raw).and_then(|v| timestamp_from_value(v).ok());

    let type_tag = raw.record_type.as_ref().map(|t| match t {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });

    let kind = match raw.record_type.as_ref().and_then(Value::as_str) {
        Some(TYPE_USER) => RecordKind::User { message: raw.message },
        Some(TYPE_ASSISTANT) => RecordKind::Assistant { message: raw.message },
        Some(TYPE_MESSAGE) => RecordKind::Message { message: raw.message },
        Some(TYPE_SNAPSHOT) => RecordKind::Snapshot,
        Some(other) => RecordKind::Other(other.to_string()),
        None => match type_tag {
            Some(ref tag) => RecordKind::Other(tag.clone()),
            None => RecordKind::Untyped,
        },
    };

    Record { timestamp, type_tag, kind }
}

/// Snapshot timestamp first, then the top-level one. Empty candidates fall through.
fn select_timestamp(raw: &RawRecord) -> Option<&Value> {
    let snapshot_ts = raw.snapshot.as_ref().and_then(|s| s.get("timestamp"));
    [snapshot_ts, raw.timestamp.as_ref()].into_iter().flatten().find(|v| is_present(v))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Pull the displayable text out of a record
///
/// Returns the text and the author role. Records that are not chat turns
/// yield an empty string and no role.
pub fn extract_message_content(record: &Record) -> (String, Option<Role>) {
    match &record.kind {
        RecordKind::User { message } => (user_text(message.as_ref()), Some(Role::User)),
        RecordKind::Assistant { message } | RecordKind::Message { message } => {
            (assistant_text(message.as_ref()), Some(Role::Assistant))
        }
        _ => (String::new(), None),
    }
}

fn user_text(message: Option<&Value>) -> String {
    let content = match message {
        Some(Value::Object(map)) => map.get("content"),
        Some(bare @ Value::String(_)) => Some(bare),
        _ => None,
    };
    match content {
        Some(Value::Array(items)) => {
            items.iter().map(stringify).collect::<Vec<_>>().join(" ")
        }
        Some(other) if is_truthy(other) => stringify(other),
        _ => String::new(),
    }
}

fn assistant_text(message: Option<&Value>) -> String {
    let Some(Value::Object(map)) = message else {
        return String::new();
    };
    match map.get("content") {
        Some(Value::Array(items)) => {
            let texts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(block) => {
                        let is_text =
                            block.get("type").and_then(Value::as_str) == Some(CONTENT_TYPE_TEXT);
                        is_text.then(|| block.get("text").map(stringify).unwrap_or_default())
                    }
                    Value::String(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            texts.join("\n").trim().to_string()
        }
        Some(other) if is_truthy(other) => stringify(other),
        _ => String::new(),
    }
}

/// Strings verbatim, `null` as empty, everything else as compact JSON
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> (String, Option<Role>) {
        extract_message_content(&decode_record(line).unwrap())
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(decode_record("invalid json line").is_err());
        assert!(decode_record(r#"{"type":"user""#).is_err());
    }

    #[test]
    fn test_decode_rejects_non_object_json() {
        let err = decode_record("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(decode_record("42").is_err());
        assert!(decode_record(r#""text""#).is_err());
    }

    #[test]
    fn test_classify_kinds_and_roles() {
        let user = decode_record(r#"{"type":"user"}"#).unwrap();
        assert_eq!(user.role(), Role::User);

        let message = decode_record(r#"{"type":"message"}"#).unwrap();
        assert!(matches!(message.kind, RecordKind::Message { .. }));
        assert_eq!(message.role(), Role::Assistant);

        let snapshot = decode_record(r#"{"type":"file-history-snapshot"}"#).unwrap();
        assert_eq!(snapshot.kind, RecordKind::Snapshot);
        assert_eq!(snapshot.role(), Role::Other);

        let summary = decode_record(r#"{"type":"summary","summary":"x"}"#).unwrap();
        assert_eq!(summary.kind, RecordKind::Other("summary".to_string()));

        let untyped = decode_record(r#"{"timestamp":"2024-01-01T10:00:00Z"}"#).unwrap();
        assert_eq!(untyped.kind, RecordKind::Untyped);
        assert_eq!(untyped.role(), Role::Unknown);
        assert_eq!(untyped.type_tag, None);
    }

    #[test]
    fn test_non_string_type_is_other() {
        let record = decode_record(r#"{"type":7}"#).unwrap();
        assert_eq!(record.kind, RecordKind::Other("7".to_string()));
        assert_eq!(record.type_tag.as_deref(), Some("7"));
    }

    #[test]
    fn test_snapshot_timestamp_takes_priority() {
        let record = decode_record(
            r#"{"type":"file-history-snapshot","timestamp":"2024-01-01T09:00:00Z","snapshot":{"timestamp":"2024-01-01T10:00:00Z"}}"#,
        )
        .unwrap();
        assert_eq!(record.timestamp.unwrap().to_rfc3339(), "2024-01-01T10:00:00+00:00");
    }

    #[test]
    fn test_empty_snapshot_timestamp_falls_back_to_top_level() {
        let record = decode_record(
            r#"{"type":"user","timestamp":"2024-01-01T09:00:00Z","snapshot":{"timestamp":""}}"#,
        )
        .unwrap();
        assert_eq!(record.timestamp.unwrap().to_rfc3339(), "2024-01-01T09:00:00+00:00");

        let null_snapshot =
            decode_record(r#"{"type":"user","timestamp":"2024-01-01T09:00:00Z","snapshot":null}"#)
                .unwrap();
        assert!(null_snapshot.timestamp.is_some());
    }

    #[test]
    fn test_unparsable_timestamp_is_absent() {
        let record = decode_record(r#"{"type":"user","timestamp":"soon"}"#).unwrap();
        assert_eq!(record.timestamp, None);
        let missing = decode_record(r#"{"type":"user"}"#).unwrap();
        assert_eq!(missing.timestamp, None);
    }

    #[test]
    fn test_user_string_content() {
        let (text, role) =
            extract(r#"{"type":"user","message":{"role":"user","content":"Hello there"}}"#);
        assert_eq!(text, "Hello there");
        assert_eq!(role, Some(Role::User));
    }

    #[test]
    fn test_user_list_content_joined_with_spaces() {
        let (text, _) = extract(r#"{"type":"user","message":{"content":["first",2,true,[3]]}}"#);
        assert_eq!(text, "first 2 true [3]");
    }

    #[test]
    fn test_user_scalar_and_missing_content() {
        assert_eq!(extract(r#"{"type":"user","message":{"content":42}}"#).0, "42");
        assert_eq!(extract(r#"{"type":"user","message":{"content":null}}"#).0, "");
        assert_eq!(extract(r#"{"type":"user","message":{}}"#).0, "");
        assert_eq!(extract(r#"{"type":"user"}"#), (String::new(), Some(Role::User)));
        assert_eq!(extract(r#"{"type":"user","message":"bare text"}"#).0, "bare text");
    }

    #[test]
    fn test_assistant_collects_text_blocks_only() {
        let (text, role) = extract(
            r#"{"type":"assistant","message":{"content":[{"type":"thinking","thinking":"hmm"},{"type":"text","text":"  Answer:"},"plain",{"type":"tool_use","id":"t1","name":"read","input":{}},{"type":"text","text":"done  "}]}}"#,
        );
        assert_eq!(text, "Answer:\nplain\ndone");
        assert_eq!(role, Some(Role::Assistant));
    }

    #[test]
    fn test_assistant_tool_use_only_is_empty() {
        let (text, role) = extract(
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","id":"t1","name":"x","input":{}}]}}"#,
        );
        assert_eq!(text, "");
        assert_eq!(role, Some(Role::Assistant));
    }

    #[test]
    fn test_assistant_non_object_message() {
        assert_eq!(extract(r#"{"type":"assistant","message":"oops"}"#).0, "");
        assert_eq!(extract(r#"{"type":"message","message":{"content":"direct"}}"#).0, "direct");
    }

    #[test]
    fn test_assistant_non_string_text_field_is_stringified() {
        let (text, _) =
            extract(r#"{"type":"assistant","message":{"content":[{"type":"text","text":12}]}}"#);
        assert_eq!(text, "12");
    }

    #[test]
    fn test_other_types_have_no_text() {
        assert_eq!(
            extract(r#"{"type":"system","content":"<command-name>/usage</command-name>"}"#),
            (String::new(), None)
        );
        assert_eq!(extract(r#"{"message":{"content":"orphan"}}"#), (String::new(), None));
    }
}
