//! The wire shape of one answered chat turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BilingualText, Category, Document};

/// A lightweight reference to a surfaced document. Carries just enough
/// for the caller to render a citation; the full document stays in the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    pub title: BilingualText,
    pub category: Category,
    pub official_number: String,
}

impl From<&Document> for DocumentRef {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category,
            official_number: doc.official_number.clone(),
        }
    }
}

/// Response to one chat turn. Always carries a non-empty `message`:
/// either a grounded answer or a degraded fallback answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub message: String,
    pub relevant_documents: Vec<DocumentRef>,
    /// Bounded heuristic in 0..=95; not a probability.
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
}
