//! Legal documents and their numbered articles.

use serde::{Deserialize, Serialize};

use super::Category;

/// A title carried in both corpus locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub ar: String,
    pub en: String,
}

impl BilingualText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }
}

/// Kind of legal instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Law,
    Decree,
    Regulation,
    Circular,
}

/// A numbered clause of a legal document; the finest unit of retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number as a string. Unique within the parent document.
    /// Lookup is exact string match: numbers may arrive in non-Latin digit
    /// scripts and are normalized by the classifier before lookup.
    pub number: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A legal document: a bundle of ordered articles.
///
/// Created and updated by an out-of-scope ingestion collaborator.
/// Read-only from this core's perspective except for usage-count
/// increments on retrieval hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: BilingualText,
    /// Optional short summary. Absence is an explicit `None`, never a
    /// missing key tolerated ad hoc.
    #[serde(default)]
    pub summary: Option<String>,
    pub category: Category,
    pub doc_type: DocumentType,
    /// Official gazette number. Unique across the store.
    pub official_number: String,
    pub articles: Vec<Article>,
    /// Times this document was surfaced to a requester.
    #[serde(default)]
    pub usage_count: u64,
}

impl Document {
    /// Exact-match article lookup by canonical (ASCII-digit) number.
    pub fn find_article(&self, number: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.number == number)
    }
}
