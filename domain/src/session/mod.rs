//! Session state: transcript, cost ledger, and registry trait

pub mod entities;
pub mod registry;
pub mod state;
pub mod usage;

pub use entities::{Message, Role};
pub use registry::SessionRegistry;
pub use state::SessionState;
pub use usage::{SummarizationResult, TokenUsage};
