//! SessionManager: the only writer of session state.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use qanun_core::errors::{QanunError, QanunResult, SessionError};
use qanun_core::models::{
    Category, Message, MessageMetadata, MessageRole, Session, SessionRating, SessionStatus,
};
use qanun_core::traits::ISessionStore;

use crate::analytics;

/// Manages session lifecycle and the append-only message log.
///
/// Concurrent appends to the same session are last-write-wins at the
/// store level; there is no per-session sequencing here.
pub struct SessionManager {
    store: Arc<dyn ISessionStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn ISessionStore>) -> Self {
        Self { store }
    }

    /// Create a new active session for a user.
    pub fn create(&self, user_id: &str, category: Option<Category>) -> QanunResult<Session> {
        let session = Session::new(Uuid::new_v4().to_string(), user_id.to_string(), category);
        self.store.save(&session)?;
        debug!(session_id = %session.id, user_id, "created session");
        Ok(session)
    }

    /// Load a session owned by `user_id`, or fail with `NotFound`.
    pub fn load(&self, session_id: &str, user_id: &str) -> QanunResult<Session> {
        self.store
            .load(session_id, user_id)?
            .ok_or_else(|| QanunError::NotFound {
                entity: "session",
                id: session_id.to_string(),
            })
    }

    /// Append one message to the tail of the log.
    ///
    /// The sole mutator of `messages`: prior messages are never touched,
    /// timestamps are clamped to be non-decreasing, and analytics are
    /// recomputed from the full list.
    pub fn append_message(
        &self,
        session_id: &str,
        user_id: &str,
        role: MessageRole,
        content: String,
        metadata: Option<MessageMetadata>,
        relevant_documents: Vec<String>,
    ) -> QanunResult<Session> {
        let mut session = self.load(session_id, user_id)?;
        if session.status.is_terminal() {
            return Err(SessionError::Closed {
                session_id: session.id,
                status: session.status.as_str(),
            }
            .into());
        }

        let now = Utc::now();
        let timestamp = match session.messages.last() {
            Some(last) => last.timestamp.max(now),
            None => now,
        };

        session.messages.push(Message {
            role,
            content,
            timestamp,
            metadata,
            relevant_documents,
        });
        session.analytics = analytics::recompute(&session.messages);
        session.last_activity = timestamp;

        self.store.save(&session)?;
        debug!(
            session_id = %session.id,
            total = session.analytics.total_messages,
            "appended message"
        );
        Ok(session)
    }

    /// Attach a rating. Allowed while the session is active or
    /// completed; archived and deleted sessions no longer accept one.
    pub fn rate(
        &self,
        session_id: &str,
        user_id: &str,
        score: u8,
        comment: Option<String>,
    ) -> QanunResult<Session> {
        if !(1..=5).contains(&score) {
            return Err(SessionError::InvalidRating { score }.into());
        }
        let mut session = self.load(session_id, user_id)?;
        if matches!(
            session.status,
            SessionStatus::Archived | SessionStatus::Deleted
        ) {
            return Err(SessionError::Closed {
                session_id: session.id,
                status: session.status.as_str(),
            }
            .into());
        }
        session.rating = Some(SessionRating { score, comment });
        session.last_activity = Utc::now();
        self.store.save(&session)?;
        Ok(session)
    }

    /// Mark the session completed.
    pub fn complete(&self, session_id: &str, user_id: &str) -> QanunResult<Session> {
        self.transition(session_id, user_id, SessionStatus::Completed)
    }

    /// Archive the session. Reachable directly from `Active`.
    pub fn archive(&self, session_id: &str, user_id: &str) -> QanunResult<Session> {
        self.transition(session_id, user_id, SessionStatus::Archived)
    }

    /// Soft-delete the session. Reachable directly from `Active`.
    pub fn soft_delete(&self, session_id: &str, user_id: &str) -> QanunResult<Session> {
        self.transition(session_id, user_id, SessionStatus::Deleted)
    }

    /// Single-field state transition.
    ///
    /// Requesting the state the session is already in is an idempotent
    /// no-op; any other transition out of a terminal state is rejected.
    fn transition(
        &self,
        session_id: &str,
        user_id: &str,
        target: SessionStatus,
    ) -> QanunResult<Session> {
        let mut session = self.load(session_id, user_id)?;
        if session.status == target {
            return Ok(session);
        }
        if session.status.is_terminal() {
            return Err(SessionError::TerminalState {
                session_id: session.id,
                status: session.status.as_str(),
                requested: target.as_str(),
            }
            .into());
        }
        session.status = target;
        session.last_activity = Utc::now();
        self.store.save(&session)?;
        debug!(session_id = %session.id, status = target.as_str(), "session transitioned");
        Ok(session)
    }
}
