//! Model selection from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use yoyaku_domain::{Model, ModelTier};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// tier = "fast"            # or "capable"
/// model = "gpt-4"          # explicit id, wins over tier
/// temperature = 0.0        # 0.0..=2.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Two-valued tier; ignored when `model` is set.
    pub tier: Option<String>,
    /// Explicit model identifier.
    pub model: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f64>,
}

impl FileModelsConfig {
    /// Resolve the configured model, explicit id winning over tier.
    /// Returns `None` when neither is usable; the caller falls back to the
    /// default tier.
    pub fn resolve_model(&self) -> Option<Model> {
        if let Some(name) = &self.model {
            if !name.trim().is_empty() {
                // Model::from_str is infallible; unknown ids become Custom
                return name.parse().ok();
            }
        }
        self.tier
            .as_ref()
            .and_then(|t| t.parse::<ModelTier>().ok())
            .map(|tier| tier.model())
    }

    pub(super) fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(name) = &self.model {
            if name.trim().is_empty() {
                warnings.push("models.model: model name cannot be empty".to_string());
            }
        }
        if let Some(tier) = &self.tier {
            if tier.parse::<ModelTier>().is_err() {
                warnings.push(format!(
                    "models.tier: unknown tier '{tier}', expected 'fast' or 'capable'"
                ));
            }
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                warnings.push(format!(
                    "models.temperature: {temperature} is outside [0.0, 2.0]"
                ));
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_model_wins_over_tier() {
        let config = FileModelsConfig {
            tier: Some("fast".to_string()),
            model: Some("gpt-4".to_string()),
            temperature: None,
        };
        assert_eq!(config.resolve_model(), Some(Model::Gpt4));
    }

    #[test]
    fn test_tier_resolves_when_model_unset() {
        let config = FileModelsConfig {
            tier: Some("capable".to_string()),
            ..FileModelsConfig::default()
        };
        assert_eq!(config.resolve_model(), Some(Model::Gpt4));
    }

    #[test]
    fn test_unset_resolves_to_none() {
        assert_eq!(FileModelsConfig::default().resolve_model(), None);
    }

    #[test]
    fn test_unknown_model_becomes_custom() {
        let config = FileModelsConfig {
            model: Some("local-llama".to_string()),
            ..FileModelsConfig::default()
        };
        assert_eq!(
            config.resolve_model(),
            Some(Model::Custom("local-llama".to_string()))
        );
    }

    #[test]
    fn test_validate_flags_bad_tier_and_temperature() {
        let config = FileModelsConfig {
            tier: Some("medium".to_string()),
            model: None,
            temperature: Some(3.5),
        };
        let warnings = config.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("medium"));
        assert!(warnings[1].contains("3.5"));
    }
}
