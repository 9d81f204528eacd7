//! Transport layer - one `HttpClient` trait, two implementations.
//!
//! - [`NetworkHttpClient`]: reqwest over the network
//! - [`OneshotHttpClient`]: in-process calls into an axum `Router`

pub mod http;
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;

/// Header carrying the anonymous visitor token
pub const VISITOR_TOKEN_HEADER: &str = "X-Visitor-Token";
