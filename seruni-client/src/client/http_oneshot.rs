// seruni-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-process transport

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::VISITOR_TOKEN_HEADER;
use super::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum `Router` directly through tower's `oneshot`, so the same
/// session code can run against an in-process API (demos, tests) with no
/// network involved.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use seruni_client::OneshotHttpClient;
///
/// let router: Router = build_api().with_state(state);
/// let client = OneshotHttpClient::new(router);
/// let locations: Vec<Location> = client.get("/locations/", None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        visitor_token: Option<&str>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = visitor_token {
            builder = builder.header(VISITOR_TOKEN_HEADER, token);
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes);
            return Err(ClientError::from_status(status, &text));
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None, visitor_token)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Some(bytes), visitor_token)?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, None, visitor_token)?;
        self.execute(request).await
    }
}
