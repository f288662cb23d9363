//! Field access helpers for untrusted JSON produced by the extraction and
//! suggestion collaborators. Every helper is total: missing or oddly typed
//! values come back as `None`/empty instead of an error.

use serde_json::{Map, Value};

/// Stringifies scalar values. Strings pass through, numbers and booleans are
/// rendered; nulls, arrays and objects yield `None`.
pub fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Upper-cases the first character: `company` → `Company`.
fn capitalized(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Returns the first non-null value under any of `keys`, trying each key as
/// written and then capitalized.
pub fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .filter(|v| !v.is_null())
            .or_else(|| obj.get(&capitalized(key)).filter(|v| !v.is_null()))
    })
}

/// Reads a scalar field under any alias, trimmed. Missing or non-scalar → "".
pub fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    lookup(obj, keys)
        .and_then(coerce_scalar)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Like [`string_field`], but array values are joined line by line so
/// description-like fields survive producers that emit a bullet list.
pub fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    match lookup(obj, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(coerce_scalar)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        Some(other) => coerce_scalar(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        None => String::new(),
    }
}

const RANGE_SEPARATORS: &[&str] = &[" - ", " – ", " — ", "–", "—", " to "];

/// Splits a date range such as `Jan 2020 - Present` into `(start, end)`.
/// Plain hyphens only count with surrounding spaces so `2020-01` stays intact;
/// an unsplittable value becomes the start date.
pub fn split_date_range(dates: &str) -> (String, String) {
    let dates = dates.trim();
    for separator in RANGE_SEPARATORS {
        if let Some((start, end)) = dates.split_once(separator) {
            return (start.trim().to_string(), end.trim().to_string());
        }
    }
    (dates.to_string(), String::new())
}
