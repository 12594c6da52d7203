//! Collaborator seams: the document store, session store, and generation
//! service are external systems reached only through these traits.

mod document_store;
mod generation;
mod session_store;

pub use document_store::IDocumentStore;
pub use generation::IGenerationClient;
pub use session_store::ISessionStore;
