//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, Environment, File};
use std::path::Path;

use super::{global_config_path, Config};

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `CHROMACTL_` and use double
    /// underscores for nested values. For example:
    /// - `CHROMACTL_STORE__HOST=remote.example.com`
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut builder = ConfigLib::builder();

        // Add the config file if it exists
        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        // Add environment variables with CHROMACTL_ prefix
        builder = builder.add_source(
            Environment::with_prefix("CHROMACTL")
                .separator("__")
                .try_parsing(true),
        );

        // Support backward-compatible environment variables for the store
        if let Ok(host) = std::env::var("CHROMA_HOST") {
            builder = builder
                .set_override("store.host", host)
                .map_err(|e| Error::config(format!("Failed to set CHROMA_HOST: {e}")))?;
        }
        if let Ok(port) = std::env::var("CHROMA_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder
                    .set_override("store.port", port_num)
                    .map_err(|e| Error::config(format!("Failed to set CHROMA_PORT: {e}")))?;
            }
        }

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.chromactl/config.toml or custom --config path)
    /// 3. Environment variables (CHROMACTL_*, legacy CHROMA_HOST/CHROMA_PORT)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
