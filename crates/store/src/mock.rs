// In-memory mock store used by unit and integration tests
use crate::{CollectionInfo, CollectionStore, GetResult, IncludeField, ItemRecord};
use async_trait::async_trait;
use chromactl_core::{Error, Result};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Stateful in-memory implementation of [`CollectionStore`].
///
/// Collections are held in insertion-independent name order. Deletion
/// failures can be injected per collection to exercise partial-failure
/// paths without a live server.
#[derive(Default)]
pub struct MockCollectionStore {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    collections: BTreeMap<String, Vec<ItemRecord>>,
    delete_failures: BTreeMap<String, String>,
}

impl MockCollectionStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection with the given items, replacing any existing one
    pub fn insert_collection(&self, name: &str, items: Vec<ItemRecord>) {
        self.lock().collections.insert(name.to_string(), items);
    }

    /// Make future deletions of `name` fail with `message`
    pub fn fail_delete(&self, name: &str, message: &str) {
        self.lock()
            .delete_failures
            .insert(name.to_string(), message.to_string());
    }

    /// Names currently present in the store
    pub fn collection_names(&self) -> Vec<String> {
        self.lock().collections.keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn info(name: &str) -> CollectionInfo {
        CollectionInfo {
            id: format!("mock-{name}"),
            name: name.to_string(),
            metadata: None,
        }
    }
}

#[async_trait]
impl CollectionStore for MockCollectionStore {
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        Ok(self
            .lock()
            .collections
            .keys()
            .map(|name| Self::info(name))
            .collect())
    }

    async fn get_collection(&self, name: &str) -> Result<CollectionInfo> {
        let state = self.lock();
        if state.collections.contains_key(name) {
            Ok(Self::info(name))
        } else {
            Err(Error::not_found(name))
        }
    }

    async fn get_items(
        &self,
        collection: &CollectionInfo,
        limit: usize,
        ids: Option<&[String]>,
        include: &[IncludeField],
    ) -> Result<GetResult> {
        let state = self.lock();
        let items = state
            .collections
            .get(&collection.name)
            .ok_or_else(|| Error::not_found(collection.name.clone()))?;

        let page: Vec<&ItemRecord> = items
            .iter()
            .filter(|item| match ids {
                Some(wanted) => wanted.contains(&item.id),
                None => true,
            })
            .take(limit)
            .collect();

        let mut result = GetResult {
            ids: page.iter().map(|item| item.id.clone()).collect(),
            ..GetResult::default()
        };
        if include.contains(&IncludeField::Documents) {
            result.documents = Some(page.iter().map(|item| item.document.clone()).collect());
        }
        if include.contains(&IncludeField::Metadatas) {
            result.metadatas = Some(page.iter().map(|item| item.metadata.clone()).collect());
        }
        if include.contains(&IncludeField::Embeddings) {
            result.embeddings = Some(page.iter().map(|item| item.embedding.clone()).collect());
        }
        Ok(result)
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        let mut state = self.lock();
        if let Some(message) = state.delete_failures.get(name) {
            return Err(Error::store(message.clone()));
        }
        if state.collections.remove(name).is_none() {
            return Err(Error::not_found(name));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
