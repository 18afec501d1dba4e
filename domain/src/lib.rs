//! Domain layer for yoyaku
//!
//! This crate contains the core business logic for session-scoped text
//! summarization: the conversation transcript, the cost ledger, model
//! selection, the per-model price table, and the summary prompt template.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! One interactive session owns an ordered [`Transcript`](session::state::SessionState)
//! of role-tagged messages and an ordered ledger of per-call costs. Both are
//! append-only; the only wholesale mutation is an explicit reset.
//!
//! ## Cost
//!
//! Costs are exact decimals ([`rust_decimal::Decimal`]), never binary floats.
//! A ledger summed over thousands of 0.00001-scale entries must not drift.

pub mod core;
pub mod pricing;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    model::{Model, ModelConfig, ModelTier},
};
pub use pricing::cost_from_usage;
pub use prompt::{SummaryOptions, SummaryPrompt};
pub use session::{
    entities::{Message, Role},
    registry::SessionRegistry,
    state::SessionState,
    usage::{SummarizationResult, TokenUsage},
};
