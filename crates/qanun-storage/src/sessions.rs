//! In-memory session store. Whole-document saves, last-write-wins.

use dashmap::DashMap;

use qanun_core::errors::QanunResult;
use qanun_core::models::Session;
use qanun_core::traits::ISessionStore;

/// Thread-safe in-memory session store keyed by session id.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl ISessionStore for InMemorySessionStore {
    fn load(&self, session_id: &str, user_id: &str) -> QanunResult<Option<Session>> {
        Ok(self
            .sessions
            .get(session_id)
            .filter(|s| s.user_id == user_id)
            .map(|s| s.clone()))
    }

    fn save(&self, session: &Session) -> QanunResult<()> {
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }
}
