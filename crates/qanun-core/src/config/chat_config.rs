use serde::{Deserialize, Serialize};

use super::defaults;

/// Turn-level validation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Queries longer than this (in characters) are rejected before any
    /// retrieval work.
    pub max_query_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_query_chars: defaults::DEFAULT_MAX_QUERY_CHARS,
        }
    }
}
