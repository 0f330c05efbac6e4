//! Mapping of structured JSON payloads to records.
//!
//! JSON sources are already a sequence of objects, so no patterns are
//! needed: each object becomes one record by renaming a fixed list of keys.

use serde_json::Value;

use crate::error::{Result, ScraperError};
use crate::types::Record;

/// Where the objects of a JSON payload live and how their keys are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonShape {
    /// Key of the array inside a top-level object; `None` when the payload
    /// itself is the array.
    pub list_key: Option<&'static str>,

    /// `(record field, source key)` pairs, in output order.
    pub fields: &'static [(&'static str, &'static str)],
}

/// Map every object of a payload to a record, in source order.
///
/// `url` is only used for error context.
pub fn map_objects(payload: &Value, shape: &JsonShape, url: &str) -> Result<Vec<Record>> {
    let items = match shape.list_key {
        Some(key) => payload.get(key).ok_or_else(|| ScraperError::UnexpectedPayload {
            url: url.to_string(),
            message: format!("missing '{key}' key"),
        })?,
        None => payload,
    };

    let array = items
        .as_array()
        .ok_or_else(|| ScraperError::UnexpectedPayload {
            url: url.to_string(),
            message: format!("expected an array, found {}", kind_of(items)),
        })?;

    Ok(array.iter().map(|item| map_object(item, shape)).collect())
}

/// Map one object. Missing keys, `null` values and non-object items yield
/// absent fields.
#[must_use]
pub fn map_object(item: &Value, shape: &JsonShape) -> Record {
    shape
        .fields
        .iter()
        .map(|(field, key)| (*field, item.get(*key).and_then(scalar_text)))
        .collect()
}

/// Text form of a JSON value. Strings are taken verbatim.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
