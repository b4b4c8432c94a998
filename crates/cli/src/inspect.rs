//! Collection inspection: enumeration, bounded sampling, point lookups
//!
//! Everything here is read-only against the store. Inspection fetches one
//! bounded page per collection and never mutates or caches anything.

use chromactl_core::Result;
use chromactl_store::{CollectionStore, IncludeField, ItemRecord};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::debug;

/// Summary of one inspected collection
#[derive(Debug, Clone)]
pub struct CollectionSummary {
    pub name: String,
    /// Items seen in a single bounded page. Once the collection outgrows
    /// the page limit this stays at the limit; it is not a true size count.
    pub total_count: usize,
    /// First item of the page, if any. The document is kept whole here;
    /// clipping happens only when rendering.
    pub sample: Option<ItemRecord>,
    /// Every id in the fetched page
    pub all_ids: Vec<String>,
}

/// Enumerate all collection names.
///
/// Propagates a connection failure; there is no softer outcome when the
/// store cannot even be listed.
pub async fn list_all(store: &dyn CollectionStore) -> Result<Vec<String>> {
    let collections = store.list_collections().await?;
    debug!("Found {} collections", collections.len());
    Ok(collections.into_iter().map(|c| c.name).collect())
}

/// Inspect a collection: resolve it, fetch up to `page_limit` items and
/// summarize what came back.
pub async fn inspect(
    store: &dyn CollectionStore,
    name: &str,
    page_limit: usize,
) -> Result<CollectionSummary> {
    let collection = store.get_collection(name).await?;
    let page = store
        .get_items(&collection, page_limit, None, IncludeField::DEFAULT)
        .await?;

    let records = page.records();
    Ok(CollectionSummary {
        name: name.to_string(),
        total_count: records.len(),
        sample: records.first().cloned(),
        all_ids: page.ids,
    })
}

/// Fetch specific items by id.
///
/// Ids with no match are simply absent from the result; an empty map is a
/// normal outcome, not an error.
pub async fn fetch_by_id(
    store: &dyn CollectionStore,
    name: &str,
    ids: &[String],
    include: &[IncludeField],
) -> Result<BTreeMap<String, ItemRecord>> {
    let collection = store.get_collection(name).await?;
    let page = store
        .get_items(&collection, ids.len().max(1), Some(ids), include)
        .await?;

    Ok(page
        .records()
        .into_iter()
        .map(|record| (record.id.clone(), record))
        .collect())
}

/// Clip `text` to at most `max_chars` characters for display. Returns the
/// original text unchanged when it already fits.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{clipped}...")
}

impl CollectionSummary {
    /// Render the summary the way the inspection report prints it. The
    /// sample document is clipped to `doc_preview_chars`; the underlying
    /// record stays untouched.
    pub fn render(&self, doc_preview_chars: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total items: {}", self.total_count);

        match &self.sample {
            Some(sample) => {
                let _ = writeln!(out, "\nSample item:");
                let _ = writeln!(out, "ID: {}", sample.id);
                if let Some(document) = &sample.document {
                    let _ = writeln!(
                        out,
                        "Document: {}",
                        truncate_for_display(document, doc_preview_chars)
                    );
                }
                if let Some(metadata) = &sample.metadata {
                    let _ = writeln!(
                        out,
                        "Metadata: {}",
                        serde_json::Value::Object(metadata.clone())
                    );
                }
            }
            None => {
                let _ = writeln!(out, "\nNo items found in collection!");
            }
        }

        let _ = writeln!(out, "\nAll IDs:");
        for id in &self.all_ids {
            let _ = writeln!(out, "- {id}");
        }
        out
    }
}
