use crate::errors::QanunResult;
use crate::models::Session;

/// Persistence seam for conversation sessions.
///
/// `save` replaces the whole session document. Concurrent saves of the
/// same session are last-write-wins; a version token would slot in here
/// if optimistic concurrency is ever required.
pub trait ISessionStore: Send + Sync {
    /// Load a session by id, scoped to its owning user. Returns `None`
    /// when the session does not exist or belongs to another user.
    fn load(&self, session_id: &str, user_id: &str) -> QanunResult<Option<Session>>;

    /// Persist the full session document.
    fn save(&self, session: &Session) -> QanunResult<()>;
}
