//! Usage metadata and pipeline output value objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Token accounting reported by the collaborator for a single call
///
/// Opaque to the pipeline: it is read from the call's response metadata,
/// never computed from text length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    /// Dollar cost for the call, when the provider reports one directly.
    /// OpenAI-compatible endpoints report token counts only; see
    /// [`crate::pricing`] for the fallback.
    pub reported_cost: Option<Decimal>,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            reported_cost: None,
        }
    }

    pub fn with_reported_cost(mut self, cost: Decimal) -> Self {
        self.reported_cost = Some(cost);
        self
    }

    pub fn total_tokens(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// The sole output of a pipeline invocation (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizationResult {
    /// Generated summary; non-empty on success.
    pub text: String,
    /// Cost incurred by exactly this call; never negative.
    pub cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_tokens() {
        let usage = TokenUsage::new(120, 45);
        assert_eq!(usage.total_tokens(), 165);
    }

    #[test]
    fn test_reported_cost_builder() {
        let usage = TokenUsage::new(1, 1).with_reported_cost(dec!(0.002));
        assert_eq!(usage.reported_cost, Some(dec!(0.002)));
    }
}
