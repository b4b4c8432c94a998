//! Bounded page fetches against a collection

use crate::chroma::client::{check_status, classify_request_error, ChromaStore};
use crate::error::StoreError;
use crate::{CollectionInfo, GetResult, IncludeField};
use serde::Serialize;

/// Request body for the store's item fetch route
#[derive(Serialize)]
struct GetRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
    include: Vec<&'static str>,
}

/// Fetch up to `limit` items from `collection`, optionally restricted to
/// `ids`. The route is addressed by collection id, so the caller must have
/// resolved the collection first.
pub(super) async fn get_items(
    store: &ChromaStore,
    collection: &CollectionInfo,
    limit: usize,
    ids: Option<&[String]>,
    include: &[IncludeField],
) -> Result<GetResult, StoreError> {
    let context = "Failed to fetch items";
    let request = GetRequest {
        ids,
        limit: Some(limit),
        include: include.iter().map(IncludeField::as_str).collect(),
    };

    let response = store
        .http
        .post(store.endpoint(&format!("collections/{}/get", collection.id)))
        .json(&request)
        .send()
        .await
        .map_err(|e| classify_request_error(context, e))?;

    let response = check_status(context, Some(&collection.name), response).await?;
    response
        .json::<GetResult>()
        .await
        .map_err(|e| StoreError::SerializationError(format!("{context}: {e}")))
}
