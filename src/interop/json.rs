//! serde_json conversion.
//!
//! Object member order is preserved in both directions. Converting to
//! serde_json can fail for numbers: serde_json holds integers in 64 bits and
//! everything else as `f64`.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use waypoint::interop::json;
//! use waypoint::Value;
//!
//! let value = Value::from(json!({"id": "L1", "tags": ["a", "b"]}));
//! assert_eq!(value.get("id"), Some(&Value::from("L1")));
//!
//! let back = serde_json::Value::try_from(&value).unwrap();
//! assert_eq!(back, json!({"id": "L1", "tags": ["a", "b"]}));
//! assert_eq!(json::to_string(&value).unwrap(), r#"{"id":"L1","tags":["a","b"]}"#);
//! ```

use crate::value::{Number, Object, Value};

/// Error returned when a value cannot be converted to or from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("number {0} cannot be represented as a JSON number")]
    Number(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(Number::trusted(n.to_string())),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(name, member)| (name, Value::from(member)))
                    .collect::<Object>(),
            ),
        }
    }
}

fn to_json_number(number: &Number) -> Result<serde_json::Number, ConversionError> {
    let unrepresentable = || ConversionError::Number(number.to_string());

    if number.is_integral() {
        if let Ok(n) = number.parse::<i64>() {
            return Ok(n.into());
        }
        return number
            .parse::<u64>()
            .map(serde_json::Number::from)
            .map_err(|_| unrepresentable());
    }

    number
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(unrepresentable)
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ConversionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(to_json_number(n)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(members) => {
                let mut map = serde_json::Map::with_capacity(members.len());
                for (name, member) in members {
                    map.insert(name.clone(), serde_json::Value::try_from(member)?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}

/// Parses JSON text with serde_json.
pub fn from_str(text: &str) -> Result<Value, ConversionError> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(parsed))
}

/// Serializes a value as compact JSON text.
pub fn to_string(value: &Value) -> Result<String, ConversionError> {
    let json = serde_json::Value::try_from(value)?;
    Ok(serde_json::to_string(&json)?)
}
