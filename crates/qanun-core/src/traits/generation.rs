use std::future::Future;
use std::time::Duration;

use crate::errors::GenerationError;
use crate::models::GenerationRequest;

/// Seam over the external text-generation service.
///
/// One call per turn, bounded by `deadline`. Implementations map every
/// failure mode (timeout, connect error, non-success status, malformed
/// body) to a `GenerationError`; callers treat all of them uniformly as
/// "generation unavailable" and fall back.
pub trait IGenerationClient: Send + Sync {
    fn generate(
        &self,
        request: &GenerationRequest,
        deadline: Duration,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}
