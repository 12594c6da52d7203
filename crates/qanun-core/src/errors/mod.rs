//! Error taxonomy for the Qanun core.
//!
//! Per-subsystem enums are folded into [`QanunError`]. Generation failures
//! deliberately never escape a chat turn: the gateway absorbs them into the
//! fallback path, so `GenerationError` appears here only for completeness.

mod generation_error;
mod session_error;
mod storage_error;

pub use generation_error::GenerationError;
pub use session_error::SessionError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type QanunResult<T> = Result<T, QanunError>;

/// Top-level error for the Qanun system.
#[derive(Debug, thiserror::Error)]
pub enum QanunError {
    /// Malformed or oversized input, rejected before any retrieval work.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A referenced entity is absent. Surfaced to the caller, no retry.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Unexpected failure in retrieval or persistence. Surfaced as a
    /// generic failure, logged with full context by the caller.
    #[error("internal error: {reason}")]
    Internal { reason: String },
}
