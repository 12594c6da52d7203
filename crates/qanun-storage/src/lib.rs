//! # qanun-storage
//!
//! In-memory, `DashMap`-backed implementations of the store traits.
//! The production document and session stores are provided collaborators;
//! these implementations back tests and embedded deployments.

mod documents;
mod sessions;

pub use documents::InMemoryDocumentStore;
pub use sessions::InMemorySessionStore;
