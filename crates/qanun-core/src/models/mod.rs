//! Shared data models: documents, categories, sessions, chat payloads,
//! and the retrieval filter language.

mod category;
mod chat;
mod document;
mod generation;
mod query;
mod session;

pub use category::Category;
pub use chat::{ChatResponse, DocumentRef};
pub use document::{Article, BilingualText, Document, DocumentType};
pub use generation::{GenerationMessage, GenerationRequest, GenerationResponse};
pub use query::{DocumentFilter, FilterClause};
pub use session::{
    Message, MessageMetadata, MessageRole, Session, SessionAnalytics, SessionRating, SessionStatus,
};
