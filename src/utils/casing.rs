//! Key casing conversion
//!
//! Callers write generation parameters in camelCase (`maxOutputTokens`,
//! `topP`); the Gemini wire format is addressed in snake_case. These helpers
//! translate keys only, never values.

use serde_json::{Map, Value};

/// Convert a single camelCase identifier to snake_case
///
/// Identifiers that are already snake_case pass through unchanged.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if matches!(prev, Some(p) if p != '_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }

    out
}

/// Recursively rewrite every object key in `value` to snake_case
///
/// Arrays are walked so objects nested inside them are converted too.
/// Scalars are returned as-is.
pub fn keys_to_snake_case(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map_keys_to_snake_case(map)),
        Value::Array(items) => Value::Array(items.iter().map(keys_to_snake_case).collect()),
        other => other.clone(),
    }
}

/// Object-level variant of [`keys_to_snake_case`]
pub fn map_keys_to_snake_case(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (camel_to_snake(key), keys_to_snake_case(value)))
        .collect()
}
