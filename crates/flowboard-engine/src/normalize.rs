//! Coercion of loosely-typed API payloads into [`WorkflowItem`]s.
//!
//! The upstream app returns whatever its last step produced: a `{ "data": [...] }`
//! envelope, a bare array, or a single object. Missing or falsy fields fall back
//! to defaults rather than failing the whole fetch.

use chrono::{DateTime, Utc};
use flowboard_types::{DEFAULT_TAG_COLOR, Tag, WorkflowItem};
use serde_json::Value;

/// Strip a `{ "data": ... }` envelope if present
pub fn unwrap_envelope(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("data").unwrap_or(value),
        _ => value,
    }
}

/// Normalize an already unwrapped payload.
///
/// Arrays map element-wise, a lone object becomes a single record, anything
/// else yields an empty list.
pub fn normalize_payload(data: &Value, now: DateTime<Utc>) -> Vec<WorkflowItem> {
    match data {
        Value::Array(items) => items.iter().map(|item| normalize_item(item, now)).collect(),
        Value::Object(_) => vec![normalize_item(data, now)],
        _ => Vec::new(),
    }
}

/// Normalize one record.
///
/// Records without an id all get the same fallback, `now` in milliseconds, so
/// they share an id for the session: selecting one of them selects them all.
pub fn normalize_item(item: &Value, now: DateTime<Utc>) -> WorkflowItem {
    WorkflowItem {
        kind: string_field(item, "type"),
        name: string_field(item, "name"),
        tags: item
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(normalize_tag).collect())
            .unwrap_or_default(),
        last_updated: nonzero_int_field(item, "lastUpdated").unwrap_or_else(|| now.timestamp()),
        id: nonzero_int_field(item, "id").unwrap_or_else(|| now.timestamp_millis()),
    }
}

fn normalize_tag(tag: &Value) -> Option<Tag> {
    if !tag.is_object() {
        return None;
    }

    let color = string_field(tag, "color");
    Some(Tag {
        name: string_field(tag, "name"),
        color: if color.is_empty() {
            DEFAULT_TAG_COLOR.to_string()
        } else {
            color
        },
    })
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Integer field with falsy values (absent, null, zero, unparsable) mapped to `None`
fn nonzero_int_field(item: &Value, key: &str) -> Option<i64> {
    let value = match item.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }?;

    (value != 0).then_some(value)
}
