//! Tolerance for the `$values` list envelope.
//!
//! The booking API serializes lists with reference preservation turned on, so a
//! list may arrive either as a bare JSON array or as `{"$id": "1", "$values": [...]}`.
//! Nested lists (the services of an appointment) follow the same rule.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

const VALUES_KEY: &str = "$values";

/// A list that may arrive bare or wrapped in a `$values` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values<T> {
    Wrapped {
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> Values<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Values::Wrapped { values } => values,
            Values::Bare(values) => values,
        }
    }
}

impl<T> Default for Values<T> {
    fn default() -> Self {
        Values::Bare(Vec::new())
    }
}

/// Unwrap a response body into its list of raw records.
///
/// `null` is treated as an empty list. Anything that is neither an array nor an
/// object carrying a `$values` array is malformed.
pub fn unwrap_list(body: Value) -> Result<Vec<Value>, ApiError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut map) => match map.remove(VALUES_KEY) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(ApiError::Malformed(format!(
                "`{}` is not a list: {}",
                VALUES_KEY, other
            ))),
            None => Err(ApiError::Malformed(
                "expected a list or a `$values` envelope".to_string(),
            )),
        },
        other => Err(ApiError::Malformed(format!(
            "expected a list, got {}",
            other
        ))),
    }
}

/// Unwrap and deserialize every record; a single bad record fails the whole list
pub fn parse_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    unwrap_list(body)?
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| ApiError::Malformed(e.to_string()))
        })
        .collect()
}
