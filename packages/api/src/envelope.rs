//! # Response envelope
//!
//! Most endpoints answer `{ "success": bool, "data": ..., "message": "..." }`,
//! but not all of them. Two readings are offered:
//!
//! - [`unwrap_body`]: lenient. An envelope with `success: true` yields its
//!   `data`, `success: false` becomes [`ApiError::Rejected`], and a body
//!   without a boolean `success` flag is passed through untouched.
//! - [`Envelope::require`]: strict. The body must be an envelope; used where
//!   the success flag is the only signal that an operation worked.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// The `{ success, data, message }` wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope<Value> {
    /// Whether `body` carries a boolean `success` flag.
    pub fn detect(body: &Value) -> bool {
        matches!(body.get("success"), Some(Value::Bool(_)))
    }

    /// Read `body` as an envelope, failing when it is not one.
    pub fn require(body: Value) -> Result<Self, ApiError> {
        if !Self::detect(&body) {
            return Err(ApiError::Decode(
                "expected a {success, data, message} envelope".into(),
            ));
        }
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `data` when the envelope reports success and carries non-null data.
    pub fn into_data(self) -> Option<Value> {
        if self.success {
            self.data.filter(|d| !d.is_null())
        } else {
            None
        }
    }

    /// Turn a `success: false` envelope into [`ApiError::Rejected`].
    pub fn into_result(self) -> Result<Option<Value>, ApiError> {
        if self.success {
            Ok(self.data.filter(|d| !d.is_null()))
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

/// Lenient unwrap: envelope data on success, the raw body when there is no envelope.
pub fn unwrap_body(body: Value) -> Result<Value, ApiError> {
    if !Envelope::detect(&body) {
        return Ok(body);
    }
    Ok(Envelope::require(body)?
        .into_result()?
        .unwrap_or(Value::Null))
}

/// Decode a JSON value into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The `message` field of an error body, if any.
pub(crate) fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
