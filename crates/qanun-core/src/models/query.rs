//! The retrieval filter language executed by a document store.
//!
//! A filter is an ordered list of OR-ed clauses. Clause order defines
//! candidate priority: a document's rank bucket is the index of the first
//! clause it matches, so exact article-number clauses prepended by the
//! retrieval engine outrank generic substring hits.

use serde::{Deserialize, Serialize};

use super::{Category, Document};

/// One filter clause. Clauses are combined with logical OR: adding a
/// clause can only widen recall, never narrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterClause {
    /// Exact string equality against any article number in the document.
    ArticleNumberEquals(String),
    /// Case-insensitive substring across title (both locales), summary,
    /// and every article's title and content.
    TextContains(String),
}

impl FilterClause {
    /// Whether a document matches this clause.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            FilterClause::ArticleNumberEquals(number) => doc.find_article(number).is_some(),
            FilterClause::TextContains(needle) => {
                let needle = needle.to_lowercase();
                if needle.is_empty() {
                    return false;
                }
                doc.title.ar.to_lowercase().contains(&needle)
                    || doc.title.en.to_lowercase().contains(&needle)
                    || doc
                        .summary
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
                    || doc.articles.iter().any(|a| {
                        a.title.to_lowercase().contains(&needle)
                            || a.content.to_lowercase().contains(&needle)
                    })
            }
        }
    }
}

/// An ordered, OR-combined document filter with an optional category
/// restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub category: Option<Category>,
    pub clauses: Vec<FilterClause>,
}

impl DocumentFilter {
    pub fn new(category: Option<Category>) -> Self {
        Self {
            category,
            clauses: Vec::new(),
        }
    }

    /// Append a clause at the end (lowest priority so far).
    pub fn push(&mut self, clause: FilterClause) {
        self.clauses.push(clause);
    }

    /// Insert a clause at the front (highest priority).
    pub fn push_front(&mut self, clause: FilterClause) {
        self.clauses.insert(0, clause);
    }

    /// Index of the first clause this document matches, if any, after the
    /// category restriction. Lower is more relevant.
    pub fn match_rank(&self, doc: &Document) -> Option<usize> {
        if let Some(cat) = self.category {
            if doc.category != cat {
                return None;
            }
        }
        self.clauses.iter().position(|c| c.matches(doc))
    }
}
