//! Bulk collection deletion with post-delete verification
//!
//! One pass is enumerate, delete each collection independently, re-list to
//! verify the store is empty, and report. Per-collection failures are
//! tallied, never propagated; only the initial enumeration is allowed to
//! fail the whole run. Every invocation is a fresh full pass.

use chromactl_core::Result;
use chromactl_store::CollectionStore;
use std::fmt::Write as _;
use tracing::{info, warn};

/// Result of one delete attempt
#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub name: String,
    pub error: Option<String>,
}

impl DeletionOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Report for one full clear pass
#[derive(Debug, Clone, Default)]
pub struct ClearReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<DeletionOutcome>,
    /// Collections still present after the pass. Either a deletion failed,
    /// or a concurrent writer recreated something mid-run; both are
    /// reported rather than retried.
    pub remaining: Vec<String>,
}

impl ClearReport {
    /// True when every enumerated collection was deleted and none survive
    pub fn fully_succeeded(&self) -> bool {
        self.failed == 0 && self.remaining.is_empty()
    }

    /// Render the final summary block
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Deletion Summary:");
        let _ = writeln!(out, "- Total collections: {}", self.total);
        let _ = writeln!(out, "- Successfully deleted: {}", self.succeeded);
        let _ = writeln!(out, "- Failed to delete: {}", self.failed);

        if self.remaining.is_empty() {
            let _ = writeln!(out, "\nSuccessfully cleared all data from the store!");
        } else {
            let _ = writeln!(out, "\nWarning: Some collections still exist:");
            for name in &self.remaining {
                let _ = writeln!(out, "- {name}");
            }
            let _ = writeln!(
                out,
                "\nYou may need to manually delete these collections or try again."
            );
        }
        out
    }
}

/// Delete every collection in the store and verify the store is empty.
///
/// Fails only when the initial enumeration cannot be performed. Individual
/// deletions are attempted independently; a failure deleting one collection
/// never prevents attempting the rest.
pub async fn clear_all(store: &dyn CollectionStore) -> Result<ClearReport> {
    let collections = store.list_collections().await?;

    if collections.is_empty() {
        info!("No collections found in the store");
        return Ok(ClearReport::default());
    }

    info!("Found {} collection(s)", collections.len());

    let total = collections.len();
    let mut outcomes = Vec::with_capacity(total);
    for collection in &collections {
        info!("Deleting collection: {}", collection.name);
        match store.delete_collection(&collection.name).await {
            Ok(()) => {
                info!("Deleted collection: {}", collection.name);
                outcomes.push(DeletionOutcome {
                    name: collection.name.clone(),
                    error: None,
                });
            }
            Err(e) => {
                warn!("Failed to delete collection {}: {e}", collection.name);
                outcomes.push(DeletionOutcome {
                    name: collection.name.clone(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
    let failed = total - succeeded;

    // Re-enumerate to verify the post-condition. If even the verification
    // listing fails, fall back to the names whose deletions failed; the
    // deletions themselves already happened and must still be reported.
    let remaining = match store.list_collections().await {
        Ok(listed) => listed.into_iter().map(|c| c.name).collect(),
        Err(e) => {
            warn!("Could not verify deletion, store listing failed: {e}");
            outcomes
                .iter()
                .filter(|o| !o.succeeded())
                .map(|o| o.name.clone())
                .collect()
        }
    };

    Ok(ClearReport {
        total,
        succeeded,
        failed,
        outcomes,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_render_success() {
        let report = ClearReport {
            total: 2,
            succeeded: 2,
            failed: 0,
            outcomes: Vec::new(),
            remaining: Vec::new(),
        };
        assert!(report.fully_succeeded());
        let rendered = report.render();
        assert!(rendered.contains("Total collections: 2"));
        assert!(rendered.contains("Successfully deleted: 2"));
        assert!(rendered.contains("Successfully cleared all data"));
    }

    #[test]
    fn test_report_render_partial_failure() {
        let report = ClearReport {
            total: 3,
            succeeded: 2,
            failed: 1,
            outcomes: Vec::new(),
            remaining: vec!["stuck".to_string()],
        };
        assert!(!report.fully_succeeded());
        let rendered = report.render();
        assert!(rendered.contains("Failed to delete: 1"));
        assert!(rendered.contains("Some collections still exist"));
        assert!(rendered.contains("- stuck"));
    }
}
