//! Application layer for yoyaku
//!
//! Use cases and ports. The summarization pipeline lives here; adapters for
//! its ports (the LLM gateway and the conversation logger) live in the
//! infrastructure layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RequestParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{Completion, CompletionRequest, GatewayError, LlmGateway},
};
pub use use_cases::summarize::{
    SummarizeError, SummarizeInput, SummarizeRequest, SummarizeUseCase,
};
