//! Client configuration

use std::path::PathBuf;

use crate::{ClientError, FileStorage, NetworkHttpClient};

/// Client configuration for talking to the restaurant API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SERUNI_API_BASE | http://127.0.0.1:8000 | API base URL |
/// | SERUNI_TIMEOUT_SECS | (none) | Request timeout, unset = wait for the transport |
/// | SERUNI_STORAGE_DIR | ./.seruni | Directory of the durable visitor session |
/// | SERUNI_RESTAURANT_NAME | Ayam Penyet Surabaya | Greeting used in WhatsApp messages |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Request timeout in seconds; `None` disables the client-side timeout
    pub timeout: Option<u64>,

    /// Directory holding the persisted visitor session and cart count
    pub storage_dir: PathBuf,

    /// Restaurant name used in the reservation summary greeting
    pub restaurant_name: String,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";
    pub const DEFAULT_STORAGE_DIR: &'static str = "./.seruni";
    pub const DEFAULT_RESTAURANT_NAME: &'static str = "Ayam Penyet Surabaya";

    /// Create a new configuration for the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            storage_dir: PathBuf::from(Self::DEFAULT_STORAGE_DIR),
            restaurant_name: Self::DEFAULT_RESTAURANT_NAME.to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SERUNI_API_BASE")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.into()),
            timeout: std::env::var("SERUNI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            storage_dir: std::env::var("SERUNI_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_STORAGE_DIR)),
            restaurant_name: std::env::var("SERUNI_RESTAURANT_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_RESTAURANT_NAME.into()),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the storage directory
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set the restaurant name
    pub fn with_restaurant_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = name.into();
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> Result<NetworkHttpClient, ClientError> {
        NetworkHttpClient::from_config(self)
    }

    /// Create the durable file storage from this configuration
    pub fn build_storage(&self) -> FileStorage {
        FileStorage::new(&self.storage_dir)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
