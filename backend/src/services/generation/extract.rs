//! Best-effort recovery of structured items from backend output
//!
//! The backend is asked for a bare JSON array but routinely wraps it
//! in prose or markdown fences anyway. Recovery strategies run in a
//! fixed order; the first one that yields a syntactically valid list
//! wins. Each strategy is a pure function and independently testable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::models::{Item, LLMError};

/// Items kept per response.
pub const MAX_ITEMS: usize = 3;

static ARRAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("array pattern"));

static RECORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)\{\s*"(?:items|title|desc)":.*\}"#).expect("record pattern"));

/// Strategy 1: first bracketed list-of-records substring, parsed as an
/// array.
fn from_embedded_array(raw: &str) -> Option<Vec<Value>> {
    let found = ARRAY_RE.find(raw)?;
    match serde_json::from_str::<Value>(found.as_str()) {
        Ok(Value::Array(list)) => Some(list),
        _ => None,
    }
}

/// Strategy 2: first top-level record substring. A record with an
/// `items` list yields that list; a lone title/desc record is wrapped
/// as a one-element list.
fn from_embedded_record(raw: &str) -> Option<Vec<Value>> {
    let found = RECORD_RE.find(raw)?;
    match serde_json::from_str::<Value>(found.as_str()).ok()? {
        Value::Object(mut record) => {
            if let Some(Value::Array(list)) = record.remove("items") {
                return Some(list);
            }
            if record.contains_key("title") || record.contains_key("desc") {
                return Some(vec![Value::Object(record)]);
            }
            None
        },
        _ => None,
    }
}

/// Strategy 3: the entire payload parsed as JSON, accepting a bare
/// array or a record with an `items` list.
fn from_full_payload(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw.trim()).ok()? {
        Value::Array(list) => Some(list),
        Value::Object(mut record) => match record.remove("items") {
            Some(Value::Array(list)) => Some(list),
            _ => None,
        },
        _ => None,
    }
}

/// Recovery strategies in priority order; first success wins.
const STRATEGIES: &[fn(&str) -> Option<Vec<Value>>] =
    &[from_embedded_array, from_embedded_record, from_full_payload];

/// Absent and non-string fields coerce to the empty string.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Short prefix of the offending payload for diagnostics.
fn preview(raw: &str) -> String {
    const MAX_CHARS: usize = 120;
    let trimmed = raw.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    }
}

/// Recover up to [`MAX_ITEMS`] items from arbitrary backend text.
///
/// Fails when no strategy yields a list, or when the recovered list
/// coerces to zero items.
pub fn extract_items(raw: &str) -> Result<Vec<Item>, LLMError> {
    let list = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(raw))
        .ok_or_else(|| {
            LLMError::Extraction(format!("no structured list in backend output: {}", preview(raw)))
        })?;

    let items: Vec<Item> = list
        .iter()
        .take(MAX_ITEMS)
        .map(|record| Item {
            title: coerce_text(record.get("title")),
            desc: coerce_text(record.get("desc")),
        })
        .collect();

    if items.is_empty() {
        return Err(LLMError::EmptyResult);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_array_strategy() {
        let raw = r#"Sure! [{"title":"A","desc":"B"}] Hope this helps."#;
        let list = from_embedded_array(raw).expect("strategy matches");
        assert_eq!(list.len(), 1);

        assert!(from_embedded_array("no list here").is_none());
        // Bracketed but not valid JSON
        assert!(from_embedded_array(r#"[{"title": oops}]"#).is_none());
    }

    #[test]
    fn test_embedded_record_strategy() {
        let list = from_embedded_record(r#"{"items": []}"#).expect("items field");
        assert!(list.is_empty());

        let wrapped = from_embedded_record(r#"{"title":"A","desc":"B"}"#).expect("lone record");
        assert_eq!(wrapped.len(), 1);

        assert!(from_embedded_record(r#"{"other": 1}"#).is_none());
    }

    #[test]
    fn test_full_payload_strategy() {
        let list = from_full_payload(r#"  ["a", "b"]  "#).expect("bare array");
        assert_eq!(list.len(), 2);

        let list = from_full_payload(r#"{"count": 2, "items": ["a", "b"]}"#).expect("items");
        assert_eq!(list.len(), 2);

        assert!(from_full_payload("\"just a string\"").is_none());
        assert!(from_full_payload("{}").is_none());
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long: String = "あ".repeat(200);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 123);
    }
}
