//! Typed field access over a raw JSON object.
//!
//! Mandatory fields go through [`FieldReader::require`], which turns absence or
//! a shape mismatch into a [`DecodeError`]. Optional fields go through
//! [`FieldReader::optional`], which turns both into `None`.

use crate::error::{DecodeError, Result};
use crate::types::Hit;
use serde_json::{Map, Value};

pub(crate) struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    pub fn new(obj: &'a Map<String, Value>) -> Self {
        FieldReader { obj }
    }

    pub fn raw(&self, name: &str) -> Option<&'a Value> {
        self.obj.get(name)
    }

    pub fn require<T>(
        &self,
        name: &str,
        expected: &str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T> {
        let value = self
            .obj
            .get(name)
            .ok_or_else(|| DecodeError::MissingField(name.to_string()))?;
        extract(value).ok_or_else(|| DecodeError::TypeMismatch {
            field: name.to_string(),
            expected: expected.to_string(),
            actual: json_type_name(value).to_string(),
        })
    }

    pub fn optional<T>(
        &self,
        name: &str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.obj.get(name)?;
        let extracted = extract(value);
        if extracted.is_none() {
            tracing::debug!(
                field = name,
                actual = json_type_name(value),
                "ignoring mistyped optional field"
            );
        }
        extracted
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A non-negative integer. Floats and negative numbers do not qualify.
pub(crate) fn as_count(value: &Value) -> Option<u64> {
    value.as_u64()
}

pub(crate) fn as_text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

pub(crate) fn as_flag(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// A non-negative integer carried as a string, e.g. `"666"`. A JSON number
/// does not qualify.
pub(crate) fn as_numeric_string(value: &Value) -> Option<u64> {
    value.as_str()?.parse().ok()
}

/// Validate `hits`: an array whose every element is an object.
pub(crate) fn require_hits(value: &Value) -> Result<Vec<Hit>> {
    let items = value.as_array().ok_or_else(|| DecodeError::TypeMismatch {
        field: "hits".to_string(),
        expected: "array of objects".to_string(),
        actual: json_type_name(value).to_string(),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_object()
                .cloned()
                .ok_or_else(|| DecodeError::TypeMismatch {
                    field: format!("hits[{}]", i),
                    expected: "object".to_string(),
                    actual: json_type_name(item).to_string(),
                })
        })
        .collect()
}
