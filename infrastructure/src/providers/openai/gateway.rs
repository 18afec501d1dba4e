//! OpenAI-compatible gateway adapter
//!
//! Implements [`LlmGateway`] over the `/chat/completions` HTTP surface.
//! This wire reports token counts but no dollar figure, so `reported_cost`
//! is always `None` here and the use case derives the cost from the domain
//! price table.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::file_config::FileProviderConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use yoyaku_application::ports::llm_gateway::{
    Completion, CompletionRequest, GatewayError, LlmGateway,
};
use yoyaku_domain::TokenUsage;

pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build from the `[provider]` config section, reading the API key from
    /// the configured environment variable.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            GatewayError::AuthenticationFailed(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;
        Ok(Self::new(config.base_url.clone(), api_key))
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        let body = ChatCompletionRequest {
            model: request.model.to_string(),
            temperature: request.temperature,
            messages: request.messages.iter().map(ChatMessage::from).collect(),
        };

        debug!(
            "POST {}/chat/completions model={} messages={}",
            self.base_url,
            body.model,
            body.messages.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, detail));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed completion body: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(GatewayError::EmptyCompletion)?;
        let usage = parsed
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(Completion {
            text: choice.message.content,
            usage,
        })
    }
}

fn map_send_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

fn map_status_error(status: StatusCode, detail: String) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::AuthenticationFailed(detail)
        }
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(detail),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(detail),
        _ => GatewayError::RequestFailed(format!("HTTP {status}: {detail}")),
    }
}
