//! Request payload extraction. Never fails: anything unusable becomes an empty field.

use serde_json::{Map, Value};

/// Fields a caller may send. Every field defaults to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPayload {
    pub skills: String,
    pub time: String,
    pub budget: String,
    pub market: String,
    pub location: String,
    pub business_name: String,
    pub description: String,
}

impl RequestPayload {
    /// Builds a payload from a raw request body.
    ///
    /// A missing body, malformed JSON, or a JSON value that is not an object
    /// all yield the all-empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self::from_object(&map),
            _ => Self::default(),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            skills: field(map, "skills"),
            time: field(map, "time"),
            budget: field(map, "budget"),
            market: field(map, "market"),
            location: field(map, "location"),
            business_name: field(map, "businessName"),
            description: field(map, "description"),
        }
    }
}

/// Strings pass through as-is; numbers and booleans use their JSON text.
fn field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}
