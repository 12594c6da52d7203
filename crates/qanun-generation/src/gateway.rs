//! GenerationGateway: the single abstraction over the external
//! text-generation endpoint, with one timeout policy.

use std::time::Duration;

use tracing::{debug, warn};

use qanun_core::config::GenerationConfig;
use qanun_core::errors::GenerationError;
use qanun_core::models::{GenerationRequest, GenerationResponse};
use qanun_core::traits::IGenerationClient;

/// HTTP gateway to the generation service.
pub struct GenerationGateway {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl GenerationGateway {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn post(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: GenerationResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        if body.text.trim().is_empty() {
            return Err(GenerationError::MalformedResponse {
                reason: "empty generation text".to_string(),
            });
        }
        Ok(body.text)
    }
}

impl IGenerationClient for GenerationGateway {
    /// One call, bounded by `deadline`. Timeout, connection failure, bad
    /// status, and malformed bodies all surface as `GenerationError`;
    /// the caller resolves every one of them via the fallback
    /// synthesizer within the same turn.
    async fn generate(
        &self,
        request: &GenerationRequest,
        deadline: Duration,
    ) -> Result<String, GenerationError> {
        debug!(
            messages = request.messages.len(),
            deadline_secs = deadline.as_secs(),
            "calling generation service"
        );

        match tokio::time::timeout(deadline, self.post(request)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                warn!(error = %e, "generation call failed");
                Err(e)
            }
            Err(_) => {
                warn!(deadline_secs = deadline.as_secs(), "generation call timed out");
                Err(GenerationError::DeadlineExceeded {
                    deadline_secs: deadline.as_secs(),
                })
            }
        }
    }
}
