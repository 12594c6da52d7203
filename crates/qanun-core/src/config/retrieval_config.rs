use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Cap on documents returned by one search.
    pub result_limit: usize,
    /// Per-document character budget when building generation context.
    pub excerpt_budget: usize,
    /// Whether the domain-marker re-rank stage runs.
    pub domain_rerank: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            result_limit: defaults::DEFAULT_RESULT_LIMIT,
            excerpt_budget: defaults::DEFAULT_EXCERPT_BUDGET,
            domain_rerank: defaults::DEFAULT_DOMAIN_RERANK,
        }
    }
}
