//! Shared types for the Seruni storefront
//!
//! Wire models exchanged with the restaurant API and the error code
//! table used to classify client-side failures.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ErrorCategory, ErrorCode};
pub use response::{ApiErrorBody, StatusAck};
