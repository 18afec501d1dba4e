//! Infrastructure layer for yoyaku
//!
//! Adapters for the application-layer ports: the OpenAI-compatible HTTP
//! gateway, the in-memory session registry, TOML/figment configuration
//! loading, and the JSONL conversation logger.

pub mod config;
pub mod logging;
pub mod providers;
pub mod session;

// Re-export main types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::openai::OpenAiGateway;
pub use session::InMemorySessionRegistry;
