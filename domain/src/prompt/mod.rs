//! Prompt templates for the summarization flow

mod template;

pub use template::{SummaryOptions, SummaryPrompt};
