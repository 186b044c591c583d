//! Readers for leaf-typed members.
//!
//! Each reader returns `Ok(None)` when the member is missing or `null`, the
//! converted value when the JSON type matches, and a shape error naming the
//! member and the expected type otherwise.

use crate::error::ConstraintError;
use crate::extract::json_type;
use serde_json::{Map, Value};
use tracing::debug;

fn read<T>(
    object: &Map<String, Value>,
    key: &str,
    expected: &str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Result<Option<T>, ConstraintError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => convert(value).map(Some).ok_or_else(|| {
            debug!(key, expected, found = json_type(value), "leaf member has the wrong type");
            ConstraintError::not_a(key, expected)
        }),
    }
}

pub(crate) fn read_bool(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Option<bool>, ConstraintError> {
    read(object, key, "a boolean", Value::as_bool)
}

pub(crate) fn read_string(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, ConstraintError> {
    read(object, key, "a string", |v| v.as_str().map(str::to_owned))
}

pub(crate) fn read_strings(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<String>>, ConstraintError> {
    read(object, key, "an array of strings", |v| {
        v.as_array()?.iter().map(|item| item.as_str().map(str::to_owned)).collect()
    })
}

pub(crate) fn read_u64(
    object: &Map<String, Value>,
    key: &str,
) -> Result<Option<u64>, ConstraintError> {
    read(object, key, "a non-negative integer", Value::as_u64)
}
