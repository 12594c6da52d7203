/// Document/session store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("store query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("failed to persist session {session_id}: {reason}")]
    PersistFailed { session_id: String, reason: String },
}
