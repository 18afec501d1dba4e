//! Application use cases

pub mod summarize;

pub use summarize::{SummarizeError, SummarizeInput, SummarizeRequest, SummarizeUseCase};
