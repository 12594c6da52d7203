//! Payloads exchanged with the external generation service.

use serde::{Deserialize, Serialize};

/// One message in the generation request window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMessage {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

/// Body of the generation POST: a system prompt plus a bounded sliding
/// window of recent conversation messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub messages: Vec<GenerationMessage>,
}

/// Body of a successful generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
}
