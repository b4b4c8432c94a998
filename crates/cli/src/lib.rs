//! Library interface for the chromactl CLI
//!
//! This module exposes the inspection and clearing routines for integration
//! testing while keeping argument parsing and process wiring in main.rs.

pub mod clear;
pub mod docker;
pub mod inspect;

// Re-export commonly needed types for tests
pub use chromactl_core::config::Config;
pub use chromactl_store::{CollectionStore, IncludeField, ItemRecord, MockCollectionStore};

use chromactl_core::Result;
use std::sync::Arc;

/// Connect to the configured store, bootstrapping it first when auto-start
/// is enabled. The connection is scoped to the returned handle; each
/// command run acquires and drops its own.
pub async fn connect(config: &Config) -> Result<Arc<dyn CollectionStore>> {
    if config.store.auto_start {
        docker::ensure_store_running(&config.store).await?;
    }
    chromactl_store::create_store_client(&config.store).await
}
