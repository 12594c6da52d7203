use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Generation service endpoint (HTTP POST).
    pub endpoint: String,
    /// Deadline for one generation call, in seconds. Exceeding it
    /// deterministically routes the turn to the fallback synthesizer.
    pub timeout_secs: u64,
    /// Trailing messages carried into the request for continuity.
    pub history_window: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            history_window: defaults::DEFAULT_HISTORY_WINDOW,
        }
    }
}
