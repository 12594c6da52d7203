//! Analytics recomputation.
//!
//! Analytics are never updated incrementally: after each append the
//! whole message list is folded again, so the stored value is always a
//! pure function of the log.

use qanun_core::models::{Message, SessionAnalytics};

/// Recompute session analytics from the full message list.
pub fn recompute(messages: &[Message]) -> SessionAnalytics {
    SessionAnalytics::from_messages(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use qanun_core::models::{MessageMetadata, MessageRole};

    fn msg(role: MessageRole, latency_ms: Option<f64>) -> Message {
        Message {
            role,
            content: "x".to_string(),
            timestamp: Utc::now(),
            metadata: Some(MessageMetadata {
                confidence: None,
                latency_ms,
            }),
            relevant_documents: vec![],
        }
    }

    #[test]
    fn recompute_matches_a_manual_fold() {
        let messages = vec![
            msg(MessageRole::User, None),
            msg(MessageRole::Assistant, Some(50.0)),
            msg(MessageRole::User, None),
            msg(MessageRole::Assistant, Some(150.0)),
        ];
        let a = recompute(&messages);
        assert_eq!(a.total_messages, 4);
        assert_eq!(a.user_messages, 2);
        assert_eq!(a.assistant_messages, 2);
        assert!((a.avg_response_latency_ms - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn messages_without_timing_are_excluded_from_the_average() {
        let messages = vec![
            msg(MessageRole::Assistant, None),
            msg(MessageRole::Assistant, Some(40.0)),
        ];
        assert!((recompute(&messages).avg_response_latency_ms - 40.0).abs() < f64::EPSILON);
    }
}
