// seruni-client/src/client/http.rs
// HTTP client - network transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::VISITOR_TOKEN_HEADER;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// `visitor_token` is passed per call: the token belongs to the visitor
/// session, which may be replaced between two requests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        visitor_token: Option<&str>,
    ) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        visitor_token: Option<&str>,
    ) -> ClientResult<T>;

    async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        visitor_token: Option<&str>,
    ) -> ClientResult<T>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    /// Create a client without a request timeout
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client; `timeout = None` lets requests wait for the transport
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        if base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_timeout(&config.base_url, config.timeout.map(Duration::from_secs))
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        mut req: RequestBuilder,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        if let Some(token) = visitor_token {
            req = req.header(VISITOR_TOKEN_HEADER, token);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, body = %text, "request failed");
            return Err(ClientError::from_status(status, &text));
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let req = self.client.get(self.url(path));
        self.send(req, visitor_token).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let req = self.client.post(self.url(path)).json(body);
        self.send(req, visitor_token).await
    }

    async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        visitor_token: Option<&str>,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let req = self.client.post(self.url(path));
        self.send(req, visitor_token).await
    }
}
