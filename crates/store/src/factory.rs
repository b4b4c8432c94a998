use crate::{mock::MockCollectionStore, CollectionStore};
use chromactl_core::{config::StoreConfig, Error};
use std::sync::Arc;

use crate::chroma::ChromaStoreBuilder;

/// Creates a store client based on configuration.
///
/// This is the primary factory function for connecting to the external
/// store. It returns a trait object that hides implementation details, so
/// different providers (Chroma, mock) can be used interchangeably. The
/// returned client owns its connection; acquisition is scoped to the call
/// site and nothing is shared at process level.
///
/// # Errors
/// Returns an error if the store cannot be reached during the initial
/// health check.
pub async fn create_store_client(config: &StoreConfig) -> Result<Arc<dyn CollectionStore>, Error> {
    match config.provider.as_str() {
        "chroma" => {
            let store = ChromaStoreBuilder::from_config(config.clone()).build().await?;
            Ok(Arc::new(store) as Arc<dyn CollectionStore>)
        }
        _ => {
            // Default to mock for unknown providers
            Ok(Arc::new(MockCollectionStore::new()) as Arc<dyn CollectionStore>)
        }
    }
}
