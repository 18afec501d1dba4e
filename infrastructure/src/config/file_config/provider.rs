//! Upstream endpoint settings from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible endpoint configuration
///
/// The API key itself never lives in the file; only the name of the
/// environment variable holding it does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Endpoint base, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Per-attempt timeout override in seconds.
    pub timeout_secs: Option<u64>,
    /// Extra attempts after a transient failure.
    pub max_retries: Option<usize>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: None,
            max_retries: None,
        }
    }
}
