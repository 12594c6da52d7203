use crate::errors::QanunResult;
use crate::models::{Document, DocumentFilter};

/// Query seam over the provided document store.
///
/// `search` must honor clause order in the filter: documents matching an
/// earlier clause come first, and ordering within one clause bucket must
/// be deterministic so repeated searches against an unchanged store
/// return identical output.
pub trait IDocumentStore: Send + Sync {
    /// Ordered, limited filter execution. An unmatched filter yields an
    /// empty list, never an error.
    fn search(&self, filter: &DocumentFilter, limit: usize) -> QanunResult<Vec<Document>>;

    /// Point lookup by document id.
    fn get(&self, id: &str) -> QanunResult<Option<Document>>;

    /// Increment the usage counter of a surfaced document. Unknown ids
    /// are ignored: usage accounting is best-effort.
    fn increment_usage(&self, id: &str) -> QanunResult<()>;
}
