//! Error code table for the storefront client
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of codes by domain
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Visitor session errors
//! - 2xxx: Cart errors
//! - 3xxx: Reservation errors
//! - 4xxx: Location errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCategory, ErrorCode};
//!
//! let code = ErrorCode::DraftExpired;
//! assert_eq!(code.category(), ErrorCategory::Session);
//! assert_eq!(code.code(), 1001);
//! ```

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
