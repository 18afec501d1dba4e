//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field is optional or defaulted so a partial file merges cleanly
//! over the built-in defaults.

mod models;
mod provider;
mod summary;

pub use models::FileModelsConfig;
pub use provider::FileProviderConfig;
pub use summary::FileSummaryConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model tier / identifier / temperature (`[models]`)
    pub models: FileModelsConfig,
    /// Summary template constraints (`[summary]`)
    pub summary: FileSummaryConfig,
    /// Upstream endpoint settings (`[provider]`)
    pub provider: FileProviderConfig,
    /// Session seeding (`[session]`)
    pub session: FileSessionConfig,
    /// Conversation log output (`[logging]`)
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning human-readable warnings.
    ///
    /// Nothing here is fatal: a bad value falls back to its default and the
    /// caller decides how loudly to report it.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        warnings.extend(self.models.validate());
        if self.provider.base_url.trim().is_empty() {
            warnings.push("provider.base_url: must not be empty".to_string());
        }
        if self.provider.api_key_env.trim().is_empty() {
            warnings.push("provider.api_key_env: must not be empty".to_string());
        }
        warnings
    }
}

/// Session seeding configuration (`[session]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// System message seeded at session start and on reset. Falls back to
    /// the built-in summarization seed when unset.
    pub seed_prompt: Option<String>,
}

/// Conversation log configuration (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per completed call. Disabled when
    /// unset.
    pub conversation_log: Option<PathBuf>,
}
