//! LLM Gateway port
//!
//! Defines the interface to the external text-generation collaborator. The
//! pipeline issues exactly one call per invocation and only distinguishes
//! "succeeded" from "failed"; auth, rate limiting, and transport are the
//! collaborator's concern. Adapters live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;
use yoyaku_domain::{Message, Model, TokenUsage};

/// Errors surfaced by gateway adapters
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Completion contained no choices")]
    EmptyCompletion,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether a bounded retry could plausibly succeed.
    ///
    /// Auth and malformed-request failures are permanent; connection drops,
    /// rate limits, and timeouts are worth one more attempt.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_)
                | GatewayError::RateLimited(_)
                | GatewayError::Timeout
        )
    }
}

/// One outbound chat-completion call: ordered role-tagged messages, a model
/// selector, and a temperature already validated to `[0.0, 2.0]`.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub temperature: f64,
    pub messages: Vec<Message>,
}

/// A completed call: the generated text plus usage accounting for exactly
/// this call.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// Gateway for chat-completion calls
///
/// The call is atomic from the caller's perspective: it blocks until the
/// full response or a failure, with no intermediate states, even when the
/// collaborator streams internally.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Issue exactly one chat-completion call.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;
}
