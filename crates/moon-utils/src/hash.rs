//! Content hashing for change detection.
//!
//! Brand and category sync compares the hash of the incoming record with
//! the stored one and skips unchanged records. The hash covers only the
//! fields that carry meaning (`name`, `code`, `metadata`) and is computed
//! over a canonical JSON document, so object key order never matters.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// The hashed subset of a brand or category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFields<'a> {
    pub name: &'a str,
    pub code: Option<&'a str>,
    pub metadata: Option<&'a Value>,
}

impl<'a> ContentFields<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            code: None,
            metadata: None,
        }
    }

    pub fn with_code(mut self, code: &'a str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_metadata(mut self, metadata: &'a Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Serialize)]
struct Normalized<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    name: &'a str,
}

/// SHA-256 of the canonical form of `fields`, as 64 lowercase hex chars.
///
/// `name` and `code` are trimmed; an empty code and a `null` metadata are
/// treated as absent.
pub fn content_hash(fields: &ContentFields<'_>) -> String {
    let normalized = Normalized {
        code: fields.code.map(str::trim).filter(|c| !c.is_empty()),
        metadata: fields.metadata.filter(|m| !m.is_null()).map(canonicalize),
        name: fields.name.trim(),
    };

    // Serializing owned strings and values cannot fail.
    let json = canonicalize(&serde_json::to_value(&normalized).unwrap_or(Value::Null)).to_string();

    hex::encode(Sha256::digest(json.as_bytes()))
}

/// Rebuilds `value` with every object's keys in sorted order.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key.clone(), canonicalize(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
