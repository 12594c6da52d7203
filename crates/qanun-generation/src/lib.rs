//! # qanun-generation
//!
//! The generation half of the answering pipeline: one deadline-bounded
//! HTTP call to the external text-generation service, and the
//! deterministic fallback synthesizer that takes over whenever that
//! service is unavailable. The system degrades gracefully; it never
//! fails a user-facing legal query because the upstream dependency is
//! flaky.

pub mod fallback;
pub mod gateway;
pub mod prompt;

pub use fallback::FallbackSynthesizer;
pub use gateway::GenerationGateway;
