//! Response envelopes returned by the restaurant API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgement body for mutation endpoints, e.g. `{"status": "added"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAck {
    pub status: String,
}

/// Error body returned on non-2xx responses
///
/// The server reports either a plain message (`{"detail": "Order not found"}`)
/// or a list of field errors for request validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// Single field-level validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
}

impl FieldError {
    /// Last path segment of `loc`, which names the offending field
    pub fn field(&self) -> Option<String> {
        self.loc.last().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

impl ApiErrorBody {
    /// Human-readable message, suitable for showing verbatim to the user
    pub fn message(&self) -> String {
        match &self.detail {
            ErrorDetail::Message(msg) => msg.clone(),
            ErrorDetail::Fields(fields) => fields
                .iter()
                .map(|f| match f.field() {
                    Some(field) => format!("{field}: {}", f.msg),
                    None => f.msg.clone(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
