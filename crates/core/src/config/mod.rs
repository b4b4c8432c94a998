//! Configuration module for chromactl
//!
//! This module provides configuration structures and loading mechanisms.
//! Configuration can be loaded from TOML files and/or environment variables.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.chromactl/config.toml` and contains
/// user preferences that apply across all servers.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".chromactl").join("config.toml"))
}

/// Main configuration structure for chromactl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store connection configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Collection inspection configuration
    #[serde(default)]
    pub inspect: InspectConfig,
}

/// Connection parameters for the external vector store
///
/// # Providers
/// - `chroma` (default): ChromaDB server over its REST API
/// - `mock`: In-memory store for testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Provider type: "chroma" (default), "mock"
    #[serde(default = "default_store_provider")]
    pub provider: String,

    /// Store host
    #[serde(default = "default_store_host")]
    pub host: String,

    /// Store HTTP port
    #[serde(default = "default_store_port")]
    pub port: u16,

    /// Opt out of the server's anonymized telemetry. Only takes effect for
    /// a server bootstrapped by this tool; the client itself never emits
    /// telemetry.
    #[serde(default)]
    pub anonymized_telemetry: bool,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Start the store in docker when it is unreachable
    #[serde(default)]
    pub auto_start: bool,

    /// Optional bearer token for authenticated servers
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_store_provider(),
            host: default_store_host(),
            port: default_store_port(),
            anonymized_telemetry: false,
            timeout_ms: default_timeout_ms(),
            auto_start: false,
            api_key: None,
        }
    }
}

impl StoreConfig {
    /// Base URL of the store's HTTP API
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Tunables for the collection inspection routine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Maximum items requested in a single page fetch. This caps the
    /// reported item count; it is not a true collection-size count.
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// Sample document clip length, in characters. Display only; stored
    /// documents are never modified.
    #[serde(default = "default_doc_preview_chars")]
    pub doc_preview_chars: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
            doc_preview_chars: default_doc_preview_chars(),
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.store.provider.as_str(), "chroma" | "mock") {
            return Err(Error::config(format!(
                "Invalid store provider '{}' (expected 'chroma' or 'mock')",
                self.store.provider
            )));
        }
        if self.store.host.is_empty() {
            return Err(Error::config("store.host must not be empty"));
        }
        if self.store.port == 0 {
            return Err(Error::config("store.port must not be zero"));
        }
        if self.store.timeout_ms == 0 {
            return Err(Error::config("store.timeout_ms must not be zero"));
        }
        if self.inspect.page_limit == 0 {
            return Err(Error::config("inspect.page_limit must not be zero"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            inspect: InspectConfig::default(),
        }
    }
}
