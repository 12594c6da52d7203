/// Session state-machine errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session {session_id} is {status} and cannot transition to {requested}")]
    TerminalState {
        session_id: String,
        status: &'static str,
        requested: &'static str,
    },

    #[error("session {session_id} is {status} and no longer accepts messages")]
    Closed {
        session_id: String,
        status: &'static str,
    },

    #[error("rating score {score} is outside 1..=5")]
    InvalidRating { score: u8 },
}
