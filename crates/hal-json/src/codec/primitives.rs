//! Shape checks over generic JSON values.
//!
//! The codecs decode from [`serde_json::Value`]; these helpers turn a shape
//! mismatch into a [`DecodeError`] without the callers repeating the match.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::model::LinkProperty;

/// Returns the JSON type name of a value, for error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unwraps an object or reports `context` as not an object.
pub fn expect_object(value: Value, context: impl FnOnce() -> String) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject {
            context: context(),
            found: json_type(&other),
        }),
    }
}

/// Reads a string property value.
pub fn expect_string(
    value: Value,
    property: LinkProperty,
    context: impl FnOnce() -> String,
) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(invalid_property(&other, property, "string", context)),
    }
}

/// Reads a boolean property value.
pub fn expect_bool(
    value: Value,
    property: LinkProperty,
    context: impl FnOnce() -> String,
) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(invalid_property(&other, property, "boolean", context)),
    }
}

fn invalid_property(
    found: &Value,
    property: LinkProperty,
    expected: &'static str,
    context: impl FnOnce() -> String,
) -> DecodeError {
    DecodeError::InvalidProperty {
        context: context(),
        property: property.as_str(),
        expected,
        found: json_type(found),
    }
}

/// Parses bytes into a generic JSON value.
pub fn parse_json(input: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(input).map_err(|e| DecodeError::InvalidJson(e.to_string()))
}

/// Treats JSON `null` as an absent value.
pub fn non_null(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}
