use crate::chroma::client::{check_status, classify_request_error, ChromaStore};
use crate::{CollectionInfo, CollectionStore, GetResult, IncludeField};
use async_trait::async_trait;
use chromactl_core::Result;
use tracing::debug;

#[async_trait]
impl CollectionStore for ChromaStore {
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        let collections: Vec<CollectionInfo> = self
            .get_json("Failed to list collections", None, "collections")
            .await?;
        debug!("Store reported {} collection(s)", collections.len());
        Ok(collections)
    }

    async fn get_collection(&self, name: &str) -> Result<CollectionInfo> {
        let collection = self
            .get_json(
                "Failed to get collection",
                Some(name),
                &format!("collections/{name}"),
            )
            .await?;
        Ok(collection)
    }

    async fn get_items(
        &self,
        collection: &CollectionInfo,
        limit: usize,
        ids: Option<&[String]>,
        include: &[IncludeField],
    ) -> Result<GetResult> {
        // Implementation in items.rs
        Ok(super::items::get_items(self, collection, limit, ids, include).await?)
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        let context = "Failed to delete collection";
        let response = self
            .http
            .delete(self.endpoint(&format!("collections/{name}")))
            .send()
            .await
            .map_err(|e| classify_request_error(context, e))?;

        check_status(context, Some(name), response).await?;
        debug!("Deleted collection {name}");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.heartbeat().await?;
        Ok(())
    }
}
