//! Loosely-typed diary records.
//!
//! Some diary consumers want every leaf value as a display-ready string
//! instead of the fixed `Call`/`Lead` shape. `RawRecord` decodes a record
//! object through [`normalize_fields`], which drops empty fields and
//! sanitizes the rest.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A diary record as an open field-name → normalized-string mapping.
///
/// Fields that survive decoding are exactly those with a non-null,
/// non-empty original value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord(pub HashMap<String, String>);

impl RawRecord {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Ok(RawRecord(normalize_fields(raw)))
    }
}

/// Normalizes every leaf value of a decoded JSON object into a string,
/// dropping fields whose value is `null` or the empty string.
pub fn normalize_fields(raw: Map<String, Value>) -> HashMap<String, String> {
    let mut fields = HashMap::with_capacity(raw.len());
    for (name, value) in raw {
        if let Some(normalized) = normalize_value(&value) {
            fields.insert(name, normalized);
        }
    }
    fields
}

fn normalize_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(sanitize(s)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                // Fixed six fractional digits, kept for byte compatibility
                // with values legacy consumers have already stored.
                Some(format!("{:.6}", n.as_f64().unwrap_or_default()))
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        // Nested arrays/objects have no scalar rendering; fall back to
        // compact JSON.
        other => Some(other.to_string()),
    }
}

/// Trims whitespace and control characters from both ends, then removes
/// any control character left in the interior.
fn sanitize(s: &str) -> String {
    s.trim_matches(|c: char| c.is_whitespace() || c.is_control())
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn null_and_empty_fields_are_dropped() {
        let record = decode(json!({
            "callId": "abc",
            "manager": null,
            "city": ""
        }));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("callId"), Some("abc"));
        assert_eq!(record.get("manager"), None);
        assert_eq!(record.get("city"), None);
    }

    #[test]
    fn strings_are_sanitized() {
        let record = decode(json!({ "city": "  café\u{7}  " }));
        assert_eq!(record.get("city"), Some("café"));
    }

    #[test]
    fn interior_control_characters_are_removed() {
        let record = decode(json!({ "keyword": "foo\u{1}bar" }));
        assert_eq!(record.get("keyword"), Some("foobar"));
    }

    #[test]
    fn integers_render_base_10() {
        let record = decode(json!({ "sessionId": 42, "ctGlobalId": -7 }));
        assert_eq!(record.get("sessionId"), Some("42"));
        assert_eq!(record.get("ctGlobalId"), Some("-7"));
    }

    #[test]
    fn floats_render_with_six_fractional_digits() {
        let record = decode(json!({ "sum": 3.5 }));
        assert_eq!(record.get("sum"), Some("3.500000"));
    }

    #[test]
    fn booleans_and_nested_values_use_the_fallback() {
        let record = decode(json!({
            "successful": true,
            "orders": [{"orderId": 1}]
        }));
        assert_eq!(record.get("successful"), Some("true"));
        assert_eq!(record.get("orders"), Some(r#"[{"orderId":1}]"#));
    }

    #[test]
    fn whitespace_only_string_survives_as_empty() {
        // Only originally-empty strings are dropped; "  " normalizes to "".
        let record = decode(json!({ "manager": "  " }));
        assert_eq!(record.get("manager"), Some(""));
    }
}
