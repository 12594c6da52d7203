//! Configuration: serde-deserializable structs with full defaults, so an
//! empty TOML document is a valid configuration.

mod chat_config;
pub mod defaults;
mod generation_config;
mod retrieval_config;

pub use chat_config::ChatConfig;
pub use generation_config::GenerationConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{QanunError, QanunResult};

/// Root configuration for the whole system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QanunConfig {
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub chat: ChatConfig,
}

impl QanunConfig {
    /// Parse a TOML document. Missing sections and fields fall back to
    /// their defaults.
    pub fn from_toml(input: &str) -> QanunResult<Self> {
        toml::from_str(input).map_err(|e| QanunError::InvalidInput {
            reason: format!("invalid config: {e}"),
        })
    }
}
