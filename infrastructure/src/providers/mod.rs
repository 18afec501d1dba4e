//! LLM provider adapters

pub mod openai;
