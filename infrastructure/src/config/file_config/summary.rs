//! Summary template constraints from TOML (`[summary]` section)

use serde::{Deserialize, Serialize};
use yoyaku_domain::SummaryOptions;

/// Output-language and length constraints for the document template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSummaryConfig {
    pub language: Option<String>,
    pub max_paragraphs: Option<usize>,
    pub max_chars: Option<usize>,
}

impl FileSummaryConfig {
    /// Merge over the built-in defaults.
    pub fn to_options(&self) -> SummaryOptions {
        let mut options = SummaryOptions::default();
        if let Some(language) = &self.language {
            options.language = language.clone();
        }
        if let Some(max) = self.max_paragraphs {
            options.max_paragraphs = max;
        }
        if let Some(max) = self.max_chars {
            options.max_chars = max;
        }
        options
    }
}
