//! Output formatting module

use akshara_core::Syllable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for per-word output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one segmented word
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one word per line
    #[default]
    Text,
    /// JSON document
    Json,
    /// Markdown list or tables
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one word or table row per line",
            OutputFormat::Json => "JSON for further processing",
            OutputFormat::Markdown => "Markdown list or tables",
        }
    }
}

/// Create a word formatter for `format` writing to `writer`
pub fn word_formatter<'a, W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter + 'a>
where
    W: Write + Send + Sync + 'a,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Join syllables for display
pub(crate) fn join_syllables(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

pub mod json;
pub mod markdown;
pub mod report;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use report::write_report;
pub use text::TextFormatter;
