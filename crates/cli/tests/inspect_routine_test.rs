//! Integration tests for the inspection routine
//!
//! These tests verify enumeration, bounded sampling and point lookups
//! using the in-memory mock store.

use chromactl::inspect::{fetch_by_id, inspect, list_all, truncate_for_display};
use chromactl::{IncludeField, ItemRecord, MockCollectionStore};
use chromactl_core::error::Result;
use pretty_assertions::assert_eq;

/// Test helper to create an item with a document of the given length
fn item_with_doc(id: &str, doc_len: usize) -> ItemRecord {
    ItemRecord {
        id: id.to_string(),
        document: Some("d".repeat(doc_len)),
        metadata: None,
        embedding: None,
    }
}

#[tokio::test]
async fn test_list_all_returns_names() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection("semantic_chunks", vec![]);
    store.insert_collection("users_embeddings", vec![]);

    let names = list_all(&store).await?;
    assert_eq!(names, vec!["semantic_chunks", "users_embeddings"]);

    Ok(())
}

#[tokio::test]
async fn test_list_all_empty_store() -> Result<()> {
    let store = MockCollectionStore::new();
    let names = list_all(&store).await?;
    assert!(names.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_inspect_reports_sample_and_ids() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection(
        "chunks",
        vec![item_with_doc("first", 10), item_with_doc("second", 10)],
    );

    let summary = inspect(&store, "chunks", 1000).await?;
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.all_ids, vec!["first", "second"]);
    assert_eq!(summary.sample.as_ref().map(|s| s.id.as_str()), Some("first"));

    Ok(())
}

#[tokio::test]
async fn test_inspect_empty_collection_is_not_an_error() -> Result<()> {
    // Zero items: no sample, no ids, no error
    let store = MockCollectionStore::new();
    store.insert_collection("empty", vec![]);

    let summary = inspect(&store, "empty", 1000).await?;
    assert_eq!(summary.total_count, 0);
    assert!(summary.sample.is_none());
    assert!(summary.all_ids.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_inspect_missing_collection_is_not_found() {
    let store = MockCollectionStore::new();

    let err = inspect(&store, "nope", 1000).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_inspect_count_is_capped_by_page_limit() -> Result<()> {
    // A collection larger than the page reports the page bound, not the
    // true size
    let store = MockCollectionStore::new();
    store.insert_collection(
        "big",
        (0..5000).map(|i| item_with_doc(&format!("id-{i}"), 5)).collect(),
    );

    let summary = inspect(&store, "big", 1000).await?;
    assert_eq!(summary.total_count, 1000);
    assert_eq!(summary.all_ids.len(), 1000);

    Ok(())
}

#[tokio::test]
async fn test_truncation_is_display_only() -> Result<()> {
    // The stored document keeps its full length; only the rendering clips
    let store = MockCollectionStore::new();
    store.insert_collection("chunks", vec![item_with_doc("long", 500)]);

    let summary = inspect(&store, "chunks", 1000).await?;
    let sample = summary.sample.as_ref().unwrap();
    assert_eq!(sample.document.as_ref().unwrap().chars().count(), 500);

    let rendered = summary.render(200);
    let document_line = rendered
        .lines()
        .find(|line| line.starts_with("Document: "))
        .unwrap();
    let shown = document_line.trim_start_matches("Document: ");
    assert_eq!(shown, format!("{}...", "d".repeat(200)));

    // Rendering did not mutate the summary
    let sample = summary.sample.as_ref().unwrap();
    assert_eq!(sample.document.as_ref().unwrap().chars().count(), 500);

    Ok(())
}

#[tokio::test]
async fn test_fetch_by_id_returns_matches() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection(
        "chunks",
        vec![item_with_doc("a", 5), item_with_doc("b", 5)],
    );

    let wanted = vec!["b".to_string()];
    let items = fetch_by_id(&store, "chunks", &wanted, IncludeField::DEFAULT).await?;
    assert_eq!(items.len(), 1);
    assert!(items.contains_key("b"));

    Ok(())
}

#[tokio::test]
async fn test_fetch_by_id_miss_is_empty_not_error() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection("chunks", vec![item_with_doc("a", 5)]);

    let wanted = vec!["missing".to_string()];
    let items = fetch_by_id(&store, "chunks", &wanted, IncludeField::DEFAULT).await?;
    assert!(items.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_fetch_by_id_missing_collection_is_not_found() {
    let store = MockCollectionStore::new();

    let wanted = vec!["a".to_string()];
    let err = fetch_by_id(&store, "nope", &wanted, IncludeField::DEFAULT)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_fetch_by_id_with_embeddings_included() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection(
        "vectors",
        vec![ItemRecord {
            id: "v1".to_string(),
            document: Some("text".to_string()),
            metadata: None,
            embedding: Some(vec![0.5, 0.25]),
        }],
    );

    let wanted = vec!["v1".to_string()];
    let items = fetch_by_id(
        &store,
        "vectors",
        &wanted,
        &[IncludeField::Documents, IncludeField::Embeddings],
    )
    .await?;
    let record = &items["v1"];
    assert_eq!(record.embedding.as_deref(), Some(&[0.5, 0.25][..]));
    // Metadatas were not requested
    assert!(record.metadata.is_none());

    Ok(())
}

#[test]
fn test_truncate_for_display_boundary() {
    // Exactly at the limit: returned unchanged, no ellipsis
    let text = "x".repeat(200);
    assert_eq!(truncate_for_display(&text, 200), text);
}
