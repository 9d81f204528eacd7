//! Unified error codes for the storefront client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Visitor session errors
//! - 2xxx: Cart (draft order) errors
//! - 3xxx: Reservation errors
//! - 4xxx: Location errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Codes are plain u16 values so they survive serialization into logs
/// and UI layers unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Session ====================
    /// Draft order expired or no longer recognised
    DraftExpired = 1001,
    /// Visitor session could not be persisted
    SessionStorageFailed = 1002,

    // ==================== 2xxx: Cart ====================
    /// Add / increment / decrement rejected by the server
    MutationRejected = 2001,

    // ==================== 3xxx: Reservation ====================
    /// Reservation create rejected by the server
    ReservationRejected = 3001,
    /// Reservation flow is not in a state that allows the action
    ReservationInvalidState = 3002,

    // ==================== 4xxx: Location ====================
    /// Location has no contact phone number
    LocationPhoneMissing = 4001,

    // ==================== 9xxx: System ====================
    /// Network unreachable or unstructured server failure
    TransportFailure = 9001,
    /// Response could not be decoded
    InvalidResponse = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Please complete all fields",

            // Session
            ErrorCode::DraftExpired => "Your cart was reset, please choose again",
            ErrorCode::SessionStorageFailed => "Could not save your cart session",

            // Cart
            ErrorCode::MutationRejected => "Failed to update cart",

            // Reservation
            ErrorCode::ReservationRejected => "Reservation was rejected",
            ErrorCode::ReservationInvalidState => "Reservation is not ready to be confirmed",

            // Location
            ErrorCode::LocationPhoneMissing => {
                "Location WhatsApp number is not available, please contact support"
            }

            // System
            ErrorCode::TransportFailure => "Failed to reach the server. Please try again.",
            ErrorCode::InvalidResponse => "Unexpected response from the server",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            // Session
            1001 => Ok(ErrorCode::DraftExpired),
            1002 => Ok(ErrorCode::SessionStorageFailed),

            // Cart
            2001 => Ok(ErrorCode::MutationRejected),

            // Reservation
            3001 => Ok(ErrorCode::ReservationRejected),
            3002 => Ok(ErrorCode::ReservationInvalidState),

            // Location
            4001 => Ok(ErrorCode::LocationPhoneMissing),

            // System
            9001 => Ok(ErrorCode::TransportFailure),
            9002 => Ok(ErrorCode::InvalidResponse),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
