//! # qanun-core
//!
//! Foundation crate for the Qanun legal question-answering system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QanunConfig;
pub use errors::{QanunError, QanunResult};
pub use models::{Article, Category, Document, Message, MessageRole, Session, SessionStatus};
