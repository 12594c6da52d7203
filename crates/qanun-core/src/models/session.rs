//! Conversation sessions: an append-only message log plus derived
//! analytics, owned by one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Session lifecycle state.
///
/// `Active` is the only non-terminal state. `Archived` and `Deleted` are
/// reachable directly from `Active`, bypassing `Completed`. No transition
/// leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
    Archived,
    Deleted,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
            SessionStatus::Archived => "archived",
            SessionStatus::Deleted => "deleted",
        }
    }
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Optional per-message annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageMetadata {
    /// Retrieval-grounding confidence attached to assistant messages.
    pub confidence: Option<u8>,
    /// End-to-end turn latency, recorded on assistant messages.
    pub latency_ms: Option<f64>,
}

/// One message in a session. Messages have no lifecycle of their own:
/// the owning session exclusively holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    /// Non-decreasing within a session.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<MessageMetadata>,
    /// Document ids referenced by this message. Ids only, never embedded
    /// documents: a weak reference resolved on demand.
    #[serde(default)]
    pub relevant_documents: Vec<String>,
}

/// Derived per-session analytics. A pure function of the message list,
/// recomputed in full on every append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionAnalytics {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    /// Mean of `latency_ms` over messages carrying timing metadata.
    pub avg_response_latency_ms: f64,
}

impl SessionAnalytics {
    /// Recompute analytics from scratch.
    pub fn from_messages(messages: &[Message]) -> Self {
        let user_messages = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count();
        let latencies: Vec<f64> = messages
            .iter()
            .filter_map(|m| m.metadata.as_ref().and_then(|meta| meta.latency_ms))
            .collect();
        let avg_response_latency_ms = if latencies.is_empty() {
            0.0
        } else {
            latencies.iter().sum::<f64>() / latencies.len() as f64
        };
        Self {
            total_messages: messages.len(),
            user_messages,
            assistant_messages: messages.len() - user_messages,
            avg_response_latency_ms,
        }
    }
}

/// A user rating attached when a session is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRating {
    /// 1..=5.
    pub score: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One ongoing conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub status: SessionStatus,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub analytics: SessionAnalytics,
    #[serde(default)]
    pub rating: Option<SessionRating>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// New active session with an empty message log.
    pub fn new(id: String, user_id: String, category: Option<Category>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            category,
            status: SessionStatus::Active,
            messages: Vec::new(),
            analytics: SessionAnalytics::default(),
            rating: None,
            created_at: now,
            last_activity: now,
        }
    }
}
