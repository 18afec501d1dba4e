//! Fixed instruction template for document summarization

use serde::{Deserialize, Serialize};

/// Output constraints for the document template
///
/// Fixed per deployment: the target language and a natural-language length
/// constraint expressed as maximum paragraphs and characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub language: String,
    pub max_paragraphs: usize,
    pub max_chars: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            language: "English".to_string(),
            max_paragraphs: 3,
            max_chars: 200,
        }
    }
}

impl SummaryOptions {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_paragraphs(mut self, max: usize) -> Self {
        self.max_paragraphs = max;
        self
    }

    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = max;
        self
    }
}

/// Templates for the summarization request shapes
pub struct SummaryPrompt;

impl SummaryPrompt {
    /// Seed system message for a fresh session (transcript shape).
    pub fn seed_system() -> &'static str {
        "You are a summarization assistant. Summarize the text the user \
         provides, keeping the summary faithful, concise, and self-contained."
    }

    /// Templated single-document prompt (document shape).
    ///
    /// Wraps the raw text in fixed instructions carrying the language and
    /// length constraints; prior transcript is ignored by this shape.
    pub fn document(text: &str, title: Option<&str>, options: &SummaryOptions) -> String {
        let heading = match title {
            Some(title) => format!("# {title}\n\n"),
            None => String::new(),
        };
        format!(
            r#"Write a concise summary of the following text in {language}.

============

{heading}{text}

============

Respond in {language}.
Keep the summary to at most {paragraphs} paragraphs and {chars} characters:
"#,
            language = options.language,
            heading = heading,
            text = text,
            paragraphs = options.max_paragraphs,
            chars = options.max_chars,
        )
    }
}
