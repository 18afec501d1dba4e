//! Per-model price table
//!
//! OpenAI-compatible endpoints report token counts but no dollar figure, so
//! the call cost is derived here from the returned usage metadata. Rates are
//! dollars per 1000 tokens. Custom models have no entry; callers decide what
//! a missing price means (the pipeline records zero and warns).

use crate::core::model::Model;
use crate::session::usage::TokenUsage;
use rust_decimal::Decimal;

struct Rates {
    prompt_per_1k: Decimal,
    completion_per_1k: Decimal,
}

fn rates_for(model: &Model) -> Option<Rates> {
    match model {
        Model::Gpt35Turbo => Some(Rates {
            prompt_per_1k: Decimal::new(15, 4),    // 0.0015
            completion_per_1k: Decimal::new(2, 3), // 0.002
        }),
        Model::Gpt4 => Some(Rates {
            prompt_per_1k: Decimal::new(3, 2),     // 0.03
            completion_per_1k: Decimal::new(6, 2), // 0.06
        }),
        Model::Custom(_) => None,
    }
}

/// Exact decimal cost of one call, or `None` when the model has no price
/// table entry.
pub fn cost_from_usage(model: &Model, usage: &TokenUsage) -> Option<Decimal> {
    let rates = rates_for(model)?;
    let per_thousand = Decimal::from(1000);
    let prompt = Decimal::from(usage.prompt_tokens) * rates.prompt_per_1k / per_thousand;
    let completion = Decimal::from(usage.completion_tokens) * rates.completion_per_1k / per_thousand;
    Some(prompt + completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fast_tier_pricing() {
        let usage = TokenUsage::new(1000, 1000);
        let cost = cost_from_usage(&Model::Gpt35Turbo, &usage).unwrap();
        assert_eq!(cost, dec!(0.0035));
    }

    #[test]
    fn test_capable_tier_pricing() {
        let usage = TokenUsage::new(1000, 500);
        let cost = cost_from_usage(&Model::Gpt4, &usage).unwrap();
        assert_eq!(cost, dec!(0.06));
    }

    #[test]
    fn test_fractional_token_counts_stay_exact() {
        let usage = TokenUsage::new(137, 41);
        let cost = cost_from_usage(&Model::Gpt35Turbo, &usage).unwrap();
        // 137 * 0.0015 / 1000 + 41 * 0.002 / 1000
        assert_eq!(cost, dec!(0.0002875));
    }

    #[test]
    fn test_zero_usage_is_zero_cost() {
        let usage = TokenUsage::new(0, 0);
        assert_eq!(
            cost_from_usage(&Model::Gpt4, &usage).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_custom_model_has_no_entry() {
        let usage = TokenUsage::new(100, 100);
        let model = Model::Custom("local-llama".to_string());
        assert!(cost_from_usage(&model, &usage).is_none());
    }
}
