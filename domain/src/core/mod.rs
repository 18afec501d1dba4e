//! Core value objects and errors

pub mod error;
pub mod model;

pub use error::DomainError;
pub use model::{Model, ModelConfig, ModelTier};
