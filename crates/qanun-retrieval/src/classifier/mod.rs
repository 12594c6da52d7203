//! Query classification: legal category plus target article number.

pub mod article;
pub mod digits;
pub mod keywords;
pub mod ordinals;

use tracing::debug;

use qanun_core::config::RetrievalConfig;
use qanun_core::models::Category;
use qanun_core::traits::IDocumentStore;

use crate::engine::RetrievalEngine;

/// Outcome of classifying one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// `None` is a general inquiry.
    pub category: Option<Category>,
    /// Canonical ASCII article number, when the query names one.
    pub article_number: Option<String>,
}

/// Classifies queries against the document store.
pub struct QueryClassifier<'a> {
    store: &'a dyn IDocumentStore,
    config: RetrievalConfig,
}

impl<'a> QueryClassifier<'a> {
    pub fn new(store: &'a dyn IDocumentStore, config: RetrievalConfig) -> Self {
        Self { store, config }
    }

    /// Classify a query.
    ///
    /// An explicit caller-supplied category always wins and suppresses
    /// inference. Otherwise one discovery-mode retrieval (no category
    /// filter) runs and the first returned document's category is
    /// adopted; failing that, the static keyword table decides; failing
    /// that, the query stays a general inquiry. Classification trouble
    /// never aborts a turn: store errors degrade to the keyword path.
    pub fn classify(&self, text: &str, explicit: Option<Category>) -> Classification {
        let article_number = article::extract_article_number(text);

        let category = match explicit {
            Some(cat) => Some(cat),
            None => self
                .discover_category(text, article_number.as_deref())
                .or_else(|| keywords::match_category(&digits::normalize_digits(text))),
        };

        debug!(?category, ?article_number, "classified query");
        Classification {
            category,
            article_number,
        }
    }

    /// Discovery mode: one unfiltered retrieval; adopt the category of
    /// the best hit, if any.
    fn discover_category(&self, text: &str, article_number: Option<&str>) -> Option<Category> {
        let engine = RetrievalEngine::new(self.store, self.config.clone());
        match engine.search(text, None, article_number) {
            Ok(docs) => docs.first().map(|d| d.category),
            Err(e) => {
                debug!(error = %e, "discovery retrieval failed; falling back to keywords");
                None
            }
        }
    }
}
