/// Generation gateway errors.
///
/// Every variant means the same thing to the turn pipeline: the upstream
/// generation service is unavailable and the fallback synthesizer takes
/// over. The variants exist for logging, not for branching.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation call exceeded deadline of {deadline_secs}s")]
    DeadlineExceeded { deadline_secs: u64 },

    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("generation service returned status {status}")]
    BadStatus { status: u16 },

    #[error("generation response was malformed: {reason}")]
    MalformedResponse { reason: String },
}
