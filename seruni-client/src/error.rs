//! Client error types

use http::StatusCode;
use shared::models::{LocationId, MenuItemId, OrderId};
use shared::{ApiErrorBody, ErrorCode};
use thiserror::Error;

/// Transport-level error, one variant per class of HTTP outcome
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request understood but refused (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation (400 / 422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Other non-2xx response carrying a structured body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for transport operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map a non-2xx response to an error, keeping the server's detail text
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.message())
            .ok();
        let message = detail.clone().unwrap_or_else(|| body.to_string());

        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::Validation(message),
            _ => match detail {
                Some(message) => Self::Api {
                    status: status.as_u16(),
                    message,
                },
                None => Self::Internal(format!("{status}: {body}")),
            },
        }
    }

    /// Whether the server answered and refused the request
    ///
    /// Everything else (network failures, 5xx without body, undecodable
    /// payloads) counts as a transport failure.
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::Forbidden(_) | Self::Validation(_) => true,
            Self::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Server-provided detail for rejections
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(m) | Self::Forbidden(m) | Self::Validation(m) => m.clone(),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Error taxonomy of the draft-order session and reservation flow
#[derive(Debug, Error)]
pub enum SessionError {
    /// Missing or out-of-range form field, raised before any network call
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    /// The server no longer recognises the draft order
    #[error("draft order {order_id} expired or not found")]
    DraftExpired { order_id: OrderId },

    /// Add / increment / decrement refused by the server
    #[error("cart update for menu item {menu_item_id} rejected: {detail}")]
    MutationRejected {
        menu_item_id: MenuItemId,
        detail: String,
    },

    /// Reservation create refused by the server
    #[error("reservation rejected: {detail}")]
    ReservationRejected { detail: String },

    /// Network unreachable or unstructured failure; never retried automatically
    #[error("transport failure: {0}")]
    TransportFailure(#[source] ClientError),

    /// Reservation created but the location has no number to message
    #[error("location {location_id} has no contact number (reservation {reservation_id}, queue #{queue_number})")]
    HandoffMissingPhone {
        location_id: LocationId,
        reservation_id: i64,
        queue_number: u32,
    },

    /// Reservation flow action issued in the wrong state
    #[error("reservation flow is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    /// Durable session storage failed
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Error code used for classification and logging
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValidationFailed,
            Self::DraftExpired { .. } => ErrorCode::DraftExpired,
            Self::MutationRejected { .. } => ErrorCode::MutationRejected,
            Self::ReservationRejected { .. } => ErrorCode::ReservationRejected,
            Self::TransportFailure(ClientError::InvalidResponse(_))
            | Self::TransportFailure(ClientError::Serialization(_)) => ErrorCode::InvalidResponse,
            Self::TransportFailure(_) => ErrorCode::TransportFailure,
            Self::HandoffMissingPhone { .. } => ErrorCode::LocationPhoneMissing,
            Self::InvalidState { .. } => ErrorCode::ReservationInvalidState,
            Self::Storage(_) => ErrorCode::SessionStorageFailed,
        }
    }

    /// Message shown to the visitor
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::ReservationRejected { detail } if !detail.is_empty() => detail.clone(),
            other => other.code().message().to_string(),
        }
    }

    /// Whether the user can simply trigger the same action again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportFailure(_) | Self::ReservationRejected { .. })
    }
}
