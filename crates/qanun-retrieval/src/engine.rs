//! RetrievalEngine: builds the variant filter, executes it against the
//! document store, and applies the domain re-rank.
//!
//! `search` is read-only: usage-count increments on surfaced documents
//! are the orchestrator's responsibility, which keeps this engine
//! idempotent and testable.

use tracing::{debug, info};

use qanun_core::config::RetrievalConfig;
use qanun_core::errors::QanunResult;
use qanun_core::models::{Category, Document};
use qanun_core::traits::IDocumentStore;

use crate::classifier::digits::normalize_digits;
use crate::ranking;
use crate::search;

/// The retrieval engine. Borrows the document store for the duration of
/// one request.
pub struct RetrievalEngine<'a> {
    store: &'a dyn IDocumentStore,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(store: &'a dyn IDocumentStore, config: RetrievalConfig) -> Self {
        Self { store, config }
    }

    /// Ranked, capped candidate retrieval.
    ///
    /// An empty or blank query yields an empty list, and so does a query
    /// no variant matches; callers treat that as "no grounding
    /// available", never as an error.
    pub fn search(
        &self,
        query: &str,
        category: Option<Category>,
        article_number: Option<&str>,
    ) -> QanunResult<Vec<Document>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        // Step 1: Build the ordered variant filter.
        let filter = search::build_filter(query, category, article_number);
        debug!(
            clauses = filter.clauses.len(),
            ?category,
            article = article_number,
            "built retrieval filter"
        );

        // Step 2: Execute against the store, capped.
        let candidates = self.store.search(&filter, self.config.result_limit)?;
        if candidates.is_empty() {
            debug!("no candidates found");
            return Ok(Vec::new());
        }

        // Step 3: Stable domain re-rank.
        let ranked = if self.config.domain_rerank {
            ranking::rerank(candidates, &normalize_digits(query), article_number)
        } else {
            candidates
        };

        info!(results = ranked.len(), "retrieval complete");
        Ok(ranked)
    }
}
