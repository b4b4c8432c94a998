//! Integration tests for the bulk clear routine
//!
//! These tests verify the enumerate, delete-each, verify, report cycle
//! using the in-memory mock store, including partial-failure isolation.

use chromactl::clear::clear_all;
use chromactl::MockCollectionStore;
use chromactl_core::error::Result;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_clear_empty_store_is_idempotent() -> Result<()> {
    // An empty store is a normal terminal state, twice in a row
    let store = MockCollectionStore::new();

    for _ in 0..2 {
        let report = clear_all(&store).await?;
        assert_eq!(report.total, 0);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed, 0);
        assert!(report.remaining.is_empty());
        assert!(report.fully_succeeded());
    }

    Ok(())
}

#[tokio::test]
async fn test_clear_deletes_every_collection() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection("a", vec![]);
    store.insert_collection("b", vec![]);

    let report = clear_all(&store).await?;
    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
    assert!(report.remaining.is_empty());
    assert!(report.fully_succeeded());

    // The store really is empty afterwards
    assert!(store.collection_names().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_single_failure_does_not_abort_the_pass() -> Result<()> {
    // Deleting b fails; a and c must still be attempted and removed
    let store = MockCollectionStore::new();
    store.insert_collection("a", vec![]);
    store.insert_collection("b", vec![]);
    store.insert_collection("c", vec![]);
    store.fail_delete("b", "simulated backend failure");

    let report = clear_all(&store).await?;
    assert_eq!(report.total, 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.fully_succeeded());

    // a and c are gone, b survives and is reported as remaining
    assert_eq!(store.collection_names(), vec!["b"]);
    assert_eq!(report.remaining, vec!["b"]);

    // The failed outcome carries the error message
    let failed: Vec<_> = report.outcomes.iter().filter(|o| !o.succeeded()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].name, "b");
    assert!(failed[0]
        .error
        .as_deref()
        .unwrap()
        .contains("simulated backend failure"));

    Ok(())
}

#[tokio::test]
async fn test_all_failures_reported_individually() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection("x", vec![]);
    store.insert_collection("y", vec![]);
    store.fail_delete("x", "boom");
    store.fail_delete("y", "boom");

    let report = clear_all(&store).await?;
    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 2);
    assert_eq!(report.remaining, vec!["x", "y"]);
    assert_eq!(report.outcomes.len(), 2);
    assert!(report.outcomes.iter().all(|o| !o.succeeded()));

    Ok(())
}

#[tokio::test]
async fn test_second_pass_after_partial_failure() -> Result<()> {
    // A fresh pass picks up exactly the survivors of the previous one
    let store = MockCollectionStore::new();
    store.insert_collection("a", vec![]);
    store.insert_collection("b", vec![]);
    store.fail_delete("b", "transient failure");

    let report = clear_all(&store).await?;
    assert_eq!(report.remaining, vec!["b"]);

    // The failure clears up; the next pass starts from a new enumeration
    let store2 = MockCollectionStore::new();
    store2.insert_collection("b", vec![]);
    let report = clear_all(&store2).await?;
    assert_eq!(report.total, 1);
    assert_eq!(report.succeeded, 1);
    assert!(report.fully_succeeded());

    Ok(())
}

#[tokio::test]
async fn test_report_distinguishes_outcomes_in_rendering() -> Result<()> {
    let store = MockCollectionStore::new();
    store.insert_collection("good", vec![]);
    store.insert_collection("stuck", vec![]);
    store.fail_delete("stuck", "backend error");

    let report = clear_all(&store).await?;
    let rendered = report.render();

    // Partial success is recoverable from the printed report alone
    assert!(rendered.contains("Total collections: 2"));
    assert!(rendered.contains("Successfully deleted: 1"));
    assert!(rendered.contains("Failed to delete: 1"));
    assert!(rendered.contains("- stuck"));
    assert!(!rendered.contains("Successfully cleared all data"));

    Ok(())
}
