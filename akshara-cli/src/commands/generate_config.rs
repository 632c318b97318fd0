//! Generate config command implementation

use crate::config::CliConfig;
use akshara_core::config::defaults;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = generate_template();
        // The template must stay loadable by the current config schema
        CliConfig::from_toml_str(&template).context("Generated template is invalid")?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   akshara analyze -i words.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Default configuration with explanatory comments
fn generate_template() -> String {
    format!(
        r#"# akshara configuration

[analysis]
# Number of most frequent syllables listed in a report
top_syllables = {}

# Number of most frequent syllable-initial consonants listed
top_consonants = {}

# Number of most frequent vowels and vowel signs listed
top_vowels = {}

# Number of multi-codepoint syllables led by a consonant listed
top_combinations = {}

# Number of two-character word beginnings listed
top_beginnings = {}

# Count digits, punctuation and other non-Telugu codepoints as syllables
count_other_syllables = true

[output]
# One of "text", "json", "markdown"
default_format = "text"

# Indent JSON output
pretty_json = true
"#,
        defaults::TOP_SYLLABLES,
        defaults::TOP_CONSONANTS,
        defaults::TOP_VOWELS,
        defaults::TOP_COMBINATIONS,
        defaults::TOP_BEGINNINGS,
    )
}
