//! Port for structured conversation logging.
//!
//! Records completed summarization calls (model, token counts, cost) to a
//! machine-readable log, separate from `tracing`-based diagnostics. The
//! JSONL adapter lives in the infrastructure layer.

use serde_json::Value;

/// A structured event for the conversation log.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "summary_completed", "session_reset").
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for appending conversation events to a structured log.
///
/// `log` is synchronous and non-fallible so a broken log sink can never
/// disturb the request pipeline.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
