//! # qanun-session
//!
//! Conversation-session state: an append-only message log per session,
//! a monotone lifecycle state machine, and analytics derived purely from
//! the message list.

pub mod analytics;
pub mod manager;

pub use manager::SessionManager;
