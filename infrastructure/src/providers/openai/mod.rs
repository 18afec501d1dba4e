//! OpenAI-compatible chat-completions adapter

mod gateway;
mod types;

pub use gateway::OpenAiGateway;
