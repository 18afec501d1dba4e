//! Summarize use case.
//!
//! The request pipeline: builds the outbound messages from one of two input
//! shapes, issues a single timeout-bounded call to the gateway, derives the
//! call cost from usage metadata, and appends the completed exchange to the
//! session atomically. A failed call appends nothing to the transcript or
//! the ledger.
//!
//! The call state machine is trivial and implicit: Idle -> Calling ->
//! {Succeeded, Failed}, with no streaming or intermediate states.

use crate::config::RequestParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{Completion, CompletionRequest, GatewayError, LlmGateway};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use yoyaku_domain::{
    cost_from_usage, DomainError, Message, Model, ModelConfig, SessionRegistry,
    SummarizationResult, SummaryOptions, SummaryPrompt,
};

/// Errors that can occur during a summarization call.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Blank input is rejected locally, before any upstream call.
    #[error("Input text is empty")]
    EmptyInput,

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] GatewayError),

    /// Bounded retry was attempted and every attempt failed.
    #[error("Upstream unavailable after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: usize, last: GatewayError },

    #[error("Completion contained no text")]
    EmptyCompletion,

    #[error(transparent)]
    Session(#[from] DomainError),
}

/// The two observed request contracts, as one tagged union.
#[derive(Debug, Clone)]
pub enum SummarizeInput {
    /// Full-transcript chat call: prior turns plus the new user message are
    /// sent as-is; the seed system message carries the framing.
    Transcript { text: String },
    /// Templated single-document call: the text is wrapped in the fixed
    /// instruction template and prior transcript is ignored.
    Document { text: String, title: Option<String> },
}

impl SummarizeInput {
    /// The raw user-supplied text, regardless of shape.
    pub fn text(&self) -> &str {
        match self {
            SummarizeInput::Transcript { text } => text,
            SummarizeInput::Document { text, .. } => text,
        }
    }
}

/// Input for the [`SummarizeUseCase`].
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub session_id: String,
    pub input: SummarizeInput,
    pub config: ModelConfig,
    pub options: SummaryOptions,
}

/// Use case for running one summarization call.
///
/// Exactly one outbound call per invocation (bounded retry on transient
/// failure aside); no caching, no memoization. Repeated identical requests
/// incur repeated cost.
pub struct SummarizeUseCase {
    gateway: Arc<dyn LlmGateway>,
    sessions: Arc<dyn SessionRegistry>,
    params: RequestParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SummarizeUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, sessions: Arc<dyn SessionRegistry>) -> Self {
        Self {
            gateway,
            sessions,
            params: RequestParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute one summarization call against the session.
    ///
    /// On success the new user turn, the assistant reply, and exactly one
    /// ledger entry are appended together. On any failure the session is
    /// left untouched.
    pub async fn execute(
        &self,
        request: SummarizeRequest,
    ) -> Result<SummarizationResult, SummarizeError> {
        let raw = request.input.text();
        if raw.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        info!(
            "Summarizing {} bytes for session '{}'",
            raw.len(),
            request.session_id
        );

        // A known session always holds at least its seed message, so an
        // empty snapshot means the id was never initialized. Checked here so
        // the failure costs nothing upstream.
        let transcript = self.sessions.transcript(&request.session_id);
        if transcript.is_empty() {
            return Err(SummarizeError::Session(DomainError::UnknownSession(
                request.session_id.clone(),
            )));
        }

        let messages = match &request.input {
            SummarizeInput::Transcript { text } => {
                let mut messages = transcript;
                messages.push(Message::user(text));
                messages
            }
            SummarizeInput::Document { text, title } => {
                let prompt = SummaryPrompt::document(text, title.as_deref(), &request.options);
                vec![Message::user(prompt)]
            }
        };
        let outbound = CompletionRequest {
            model: request.config.model.clone(),
            temperature: request.config.temperature(),
            messages,
        };

        let completion = self.call_with_retry(&outbound).await?;
        if completion.text.trim().is_empty() {
            return Err(SummarizeError::EmptyCompletion);
        }

        let cost = self.derive_cost(&outbound.model, &completion);

        // All-or-nothing: both turns and the ledger entry land together.
        let turns = vec![
            Message::user(raw),
            Message::assistant(completion.text.clone()),
        ];
        self.sessions
            .record_exchange(&request.session_id, turns, cost)?;

        self.conversation_logger.log(ConversationEvent::new(
            "summary_completed",
            serde_json::json!({
                "session": request.session_id,
                "model": outbound.model.to_string(),
                "prompt_tokens": completion.usage.prompt_tokens,
                "completion_tokens": completion.usage.completion_tokens,
                "cost": cost.to_string(),
                "bytes": completion.text.len(),
            }),
        ));

        info!("Summary completed, cost ${cost}");

        Ok(SummarizationResult {
            text: completion.text,
            cost,
        })
    }

    async fn call_once(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, GatewayError> {
        match self.params.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.complete(request))
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => self.gateway.complete(request).await,
        }
    }

    async fn call_with_retry(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, SummarizeError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.call_once(request).await {
                Ok(completion) => return Ok(completion),
                Err(e) if e.is_transient() && attempt <= self.params.max_retries => {
                    warn!(
                        "Upstream attempt {}/{} failed, retrying: {}",
                        attempt,
                        self.params.max_retries + 1,
                        e
                    );
                }
                // Exhaustion means the retry budget ran out on a transient
                // failure; a non-transient error abandons retry and is
                // reported as itself.
                Err(e) if e.is_transient() && attempt > 1 => {
                    return Err(SummarizeError::RetriesExhausted { attempts: attempt, last: e });
                }
                Err(e) => return Err(SummarizeError::Upstream(e)),
            }
        }
    }

    /// The provider's own cost figure wins; otherwise the price table.
    /// A model with neither yields a zero-cost ledger entry.
    fn derive_cost(&self, model: &Model, completion: &Completion) -> Decimal {
        if let Some(reported) = completion.usage.reported_cost {
            debug!("Using provider-reported cost ${reported}");
            return reported;
        }
        match cost_from_usage(model, &completion.usage) {
            Some(cost) => cost,
            None => {
                warn!("No price table entry for model '{model}', recording zero cost");
                Decimal::ZERO
            }
        }
    }
}
