//! # qanun-retrieval
//!
//! The retrieval half of the answering pipeline: classify the query's
//! legal category and target article, rank candidate documents from the
//! store, assemble bounded generation context, and score how much
//! grounding the retrieval produced.

pub mod classifier;
pub mod confidence;
pub mod context;
pub mod engine;
pub mod ranking;
pub mod search;

pub use classifier::{Classification, QueryClassifier};
pub use context::ContextBuilder;
pub use engine::RetrievalEngine;
