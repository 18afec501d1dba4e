//! Ports (interfaces) for the application layer
//!
//! Implementations live in the infrastructure layer.

pub mod conversation_logger;
pub mod llm_gateway;
