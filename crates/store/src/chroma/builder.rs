use crate::chroma::client::ChromaStore;
use crate::error::StoreError;
use chromactl_core::{config::StoreConfig, Error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;

/// Builder for ChromaStore
pub(crate) struct ChromaStoreBuilder {
    config: StoreConfig,
}

#[allow(dead_code)]
impl ChromaStoreBuilder {
    /// Create a new builder with the given configuration
    pub fn from_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Set the host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the per-request timeout in milliseconds
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Build and connect to ChromaStore
    pub async fn build(self) -> Result<ChromaStore, Error> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                StoreError::InvalidConfig(format!("Invalid API key: {e}"))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        let store = ChromaStore {
            http,
            config: self.config,
        };

        // Verify connection is alive
        store.heartbeat().await?;

        Ok(store)
    }
}
