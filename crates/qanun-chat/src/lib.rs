//! # qanun-chat
//!
//! The per-turn orchestrator. One inbound chat message becomes one
//! request-scoped unit of work:
//! input → classifier → retrieval → context → {generation | fallback} →
//! confidence → session append → response.

pub mod engine;

pub use engine::ChatEngine;
