//! Dynamic record type used by field-name grouping.

use serde_json::{Map, Value};

use crate::errors::WordGroupsError;
use crate::group::GroupLabel;

/// An opaque structured record: a JSON object mapping field names to values.
///
/// The grouper mandates no fields; the caller's selector decides which field
/// matters.
pub type Record = Map<String, Value>;

/// Extract the group label stored under `field`.
///
/// Integer numbers become [`GroupLabel::Number`], strings become
/// [`GroupLabel::Text`]. A missing field, or a value of any other shape
/// (null, boolean, non-integer number, array, object), is a selector failure.
pub fn label_for_field(record: &Record, field: &str) -> Result<GroupLabel, WordGroupsError> {
    let value = record
        .get(field)
        .ok_or_else(|| WordGroupsError::MissingField {
            field: field.to_string(),
        })?;
    match value {
        Value::String(text) => Ok(GroupLabel::Text(text.clone())),
        Value::Number(number) => {
            number
                .as_i64()
                .map(GroupLabel::Number)
                .ok_or(WordGroupsError::UnsupportedLabel {
                    field: field.to_string(),
                    found: "non-integer number",
                })
        }
        other => Err(WordGroupsError::UnsupportedLabel {
            field: field.to_string(),
            found: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
