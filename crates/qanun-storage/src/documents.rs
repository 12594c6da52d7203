//! In-memory document store with deterministic filter execution.

use dashmap::DashMap;

use qanun_core::errors::QanunResult;
use qanun_core::models::{Document, DocumentFilter};
use qanun_core::traits::IDocumentStore;

/// Thread-safe in-memory document store.
///
/// Filter execution is bucketed by clause priority: every document is
/// ranked by the first clause it matches, buckets are ordered by clause
/// index, and documents inside one bucket are ordered by id. Repeated
/// searches against an unchanged store therefore return identical output.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: DashMap<String, Document>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(&self, doc: Document) {
        self.documents.insert(doc.id.clone(), doc);
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IDocumentStore for InMemoryDocumentStore {
    fn search(&self, filter: &DocumentFilter, limit: usize) -> QanunResult<Vec<Document>> {
        // (clause index, id, document) for every match.
        let mut matched: Vec<(usize, String, Document)> = self
            .documents
            .iter()
            .filter_map(|entry| {
                filter
                    .match_rank(entry.value())
                    .map(|rank| (rank, entry.key().clone(), entry.value().clone()))
            })
            .collect();

        // DashMap iteration order is arbitrary; the (rank, id) sort makes
        // the output deterministic.
        matched.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        matched.truncate(limit);

        Ok(matched.into_iter().map(|(_, _, doc)| doc).collect())
    }

    fn get(&self, id: &str) -> QanunResult<Option<Document>> {
        Ok(self.documents.get(id).map(|d| d.clone()))
    }

    fn increment_usage(&self, id: &str) -> QanunResult<()> {
        if let Some(mut doc) = self.documents.get_mut(id) {
            doc.usage_count += 1;
        }
        Ok(())
    }
}
