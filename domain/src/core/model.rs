//! Model value objects: identifiers, tiers, and per-request configuration

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available chat-completion models (Value Object)
///
/// The deployment exposes a small enumerated set; anything else becomes
/// `Custom` and is forwarded to the provider verbatim (with no price table
/// entry, see [`crate::pricing`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt35Turbo,
    Gpt4,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gpt4 => "gpt-4",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Gpt35Turbo
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            "gpt-4" => Model::Gpt4,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

/// Two-valued model tier exposed on the configuration surface.
///
/// `Fast` trades summary quality for cost; `Capable` is the expensive tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    #[default]
    Fast,
    Capable,
}

impl ModelTier {
    /// Concrete model this tier maps to.
    pub fn model(&self) -> Model {
        match self {
            ModelTier::Fast => Model::Gpt35Turbo,
            ModelTier::Capable => Model::Gpt4,
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelTier::Fast => write!(f, "fast"),
            ModelTier::Capable => write!(f, "capable"),
        }
    }
}

impl std::str::FromStr for ModelTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "cheap" => Ok(ModelTier::Fast),
            "capable" | "expensive" => Ok(ModelTier::Capable),
            other => Err(DomainError::InvalidModelTier(other.to_string())),
        }
    }
}

/// Per-request model configuration (Value Object)
///
/// Immutable once built; re-created from the configuration surface for each
/// interaction. Temperature is validated to `[0.0, 2.0]` at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model: Model,
    temperature: f64,
}

impl ModelConfig {
    pub fn new(model: Model, temperature: f64) -> Result<Self, DomainError> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(DomainError::InvalidTemperature(temperature));
        }
        Ok(Self { model, temperature })
    }

    /// Configuration for a tier at its default temperature.
    pub fn for_tier(tier: ModelTier) -> Self {
        Self {
            model: tier.model(),
            temperature: 0.0,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::for_tier(ModelTier::Fast)
    }
}
