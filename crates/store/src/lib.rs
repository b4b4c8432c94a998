#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod error;
mod factory;
mod mock;

// Keep the chroma module private
mod chroma;

// Export factory functions and the test-support mock
pub use factory::create_store_client;
pub use mock::MockCollectionStore;

use async_trait::async_trait;
use chromactl_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Scalar-valued metadata attached to collections and items
pub type Metadata = serde_json::Map<String, serde_json::Value>;

// ==== Traits ====

/// Client boundary to the external vector store.
///
/// Every call re-queries the store; results are authoritative only at the
/// instant of the call and nothing is cached on this side.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Enumerate all collections. Fails with [`Error::Connection`] when the
    /// store is unreachable.
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>>;

    /// Resolve a collection by name. Fails with [`Error::NotFound`] when no
    /// such collection exists.
    async fn get_collection(&self, name: &str) -> Result<CollectionInfo>;

    /// Fetch up to `limit` items from a collection, optionally restricted
    /// to specific ids. `include` selects which item fields the store
    /// returns; ids are always present. Unmatched ids produce an empty
    /// result, not an error.
    async fn get_items(
        &self,
        collection: &CollectionInfo,
        limit: usize,
        ids: Option<&[String]>,
        include: &[IncludeField],
    ) -> Result<GetResult>;

    /// Delete a collection by name. Fails with [`Error::NotFound`] when the
    /// collection does not exist and [`Error::Store`] for other failures.
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Probe store reachability
    async fn health_check(&self) -> Result<()>;
}

// ==== Models ====

/// One named collection as reported by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// One item assembled from a columnar fetch result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub document: Option<String>,
    pub metadata: Option<Metadata>,
    pub embedding: Option<Vec<f32>>,
}

/// Columnar fetch result, mirroring the store's wire shape.
///
/// Columns the caller did not ask for come back as `None`; included columns
/// are index-aligned with `ids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetResult {
    pub ids: Vec<String>,
    #[serde(default)]
    pub documents: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub metadatas: Option<Vec<Option<Metadata>>>,
    #[serde(default)]
    pub embeddings: Option<Vec<Option<Vec<f32>>>>,
}

impl GetResult {
    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the page is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Reassemble the columnar result into one record per id
    pub fn records(&self) -> Vec<ItemRecord> {
        self.ids
            .iter()
            .enumerate()
            .map(|(i, id)| ItemRecord {
                id: id.clone(),
                document: self
                    .documents
                    .as_ref()
                    .and_then(|col| col.get(i).cloned().flatten()),
                metadata: self
                    .metadatas
                    .as_ref()
                    .and_then(|col| col.get(i).cloned().flatten()),
                embedding: self
                    .embeddings
                    .as_ref()
                    .and_then(|col| col.get(i).cloned().flatten()),
            })
            .collect()
    }
}

/// Item fields a fetch can ask the store to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludeField {
    Documents,
    Metadatas,
    Embeddings,
}

impl IncludeField {
    /// The default include set: documents and metadatas. Embeddings are
    /// fetched only on demand.
    pub const DEFAULT: &'static [IncludeField] =
        &[IncludeField::Documents, IncludeField::Metadatas];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            IncludeField::Documents => "documents",
            IncludeField::Metadatas => "metadatas",
            IncludeField::Embeddings => "embeddings",
        }
    }
}

impl std::str::FromStr for IncludeField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "documents" => Ok(IncludeField::Documents),
            "metadatas" => Ok(IncludeField::Metadatas),
            "embeddings" => Ok(IncludeField::Embeddings),
            other => Err(Error::invalid_input(format!(
                "Unknown include field '{other}' (expected documents, metadatas or embeddings)"
            ))),
        }
    }
}

impl std::fmt::Display for IncludeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta(key: &str, value: &str) -> Metadata {
        let mut map = Metadata::new();
        map.insert(key.to_string(), serde_json::Value::String(value.into()));
        map
    }

    #[test]
    fn test_records_aligns_columns() {
        let result = GetResult {
            ids: vec!["a".into(), "b".into()],
            documents: Some(vec![Some("doc a".into()), None]),
            metadatas: Some(vec![None, Some(meta("source", "test"))]),
            embeddings: None,
        };

        let records = result.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[0].document.as_deref(), Some("doc a"));
        assert!(records[0].metadata.is_none());
        assert!(records[1].document.is_none());
        assert_eq!(
            records[1].metadata.as_ref().and_then(|m| m.get("source")),
            Some(&serde_json::Value::String("test".into()))
        );
        assert!(records.iter().all(|r| r.embedding.is_none()));
    }

    #[test]
    fn test_records_empty_page() {
        let result = GetResult::default();
        assert!(result.is_empty());
        assert!(result.records().is_empty());
    }

    #[test]
    fn test_include_field_round_trip() {
        for field in [
            IncludeField::Documents,
            IncludeField::Metadatas,
            IncludeField::Embeddings,
        ] {
            let parsed: IncludeField = field.as_str().parse().unwrap();
            assert_eq!(parsed, field);
        }
        assert!("vectors".parse::<IncludeField>().is_err());
    }

    #[test]
    fn test_get_result_deserializes_null_columns() {
        // Non-included columns come back as JSON null
        let json = r#"{"ids":["x"],"documents":null,"metadatas":null,"embeddings":null}"#;
        let result: GetResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ids, vec!["x".to_string()]);
        assert!(result.documents.is_none());
        assert!(result.embeddings.is_none());
    }
}
