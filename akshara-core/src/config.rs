//! Configuration for frequency analysis

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Number of syllables listed in a report
    pub const TOP_SYLLABLES: usize = 25;

    /// Number of leading consonants listed in a report
    pub const TOP_CONSONANTS: usize = 20;

    /// Number of vowels and vowel signs listed in a report
    pub const TOP_VOWELS: usize = 15;

    /// Number of consonant-led multi-codepoint syllables listed in a report
    pub const TOP_COMBINATIONS: usize = 20;

    /// Number of two-character word beginnings listed in a report
    pub const TOP_BEGINNINGS: usize = 20;

    /// Longest word, in characters, eligible for longest/shortest word
    pub const MAX_WORD_LENGTH: usize = 30;
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many of the most frequent syllables to report
    pub top_syllables: usize,
    /// How many of the most frequent leading consonants to report
    pub top_consonants: usize,
    /// How many of the most frequent vowels to report
    pub top_vowels: usize,
    /// How many consonant-led combinations (consonant plus marks) to report
    pub top_combinations: usize,
    /// How many two-character word beginnings to report
    pub top_beginnings: usize,
    /// Whether non-Telugu singleton syllables (digits, punctuation) are counted
    pub count_other_syllables: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_syllables: defaults::TOP_SYLLABLES,
            top_consonants: defaults::TOP_CONSONANTS,
            top_vowels: defaults::TOP_VOWELS,
            top_combinations: defaults::TOP_COMBINATIONS,
            top_beginnings: defaults::TOP_BEGINNINGS,
            count_other_syllables: true,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("top_syllables", self.top_syllables),
            ("top_consonants", self.top_consonants),
            ("top_vowels", self.top_vowels),
            ("top_combinations", self.top_combinations),
            ("top_beginnings", self.top_beginnings),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(Error::Configuration(format!(
                    "{name} must be greater than 0"
                )));
            }
        }
        Ok(())
    }
}

/// Fluent builder for analysis configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    top_syllables: Option<usize>,
    top_consonants: Option<usize>,
    top_vowels: Option<usize>,
    top_combinations: Option<usize>,
    top_beginnings: Option<usize>,
    count_other_syllables: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            top_syllables: Some(config.top_syllables),
            top_consonants: Some(config.top_consonants),
            top_vowels: Some(config.top_vowels),
            top_combinations: Some(config.top_combinations),
            top_beginnings: Some(config.top_beginnings),
            count_other_syllables: Some(config.count_other_syllables),
        }
    }

    /// Set the number of syllables to report
    pub fn top_syllables(mut self, limit: usize) -> Self {
        self.top_syllables = Some(limit);
        self
    }

    /// Set the number of leading consonants to report
    pub fn top_consonants(mut self, limit: usize) -> Self {
        self.top_consonants = Some(limit);
        self
    }

    /// Set the number of vowels to report
    pub fn top_vowels(mut self, limit: usize) -> Self {
        self.top_vowels = Some(limit);
        self
    }

    /// Set the number of consonant-led combinations to report
    pub fn top_combinations(mut self, limit: usize) -> Self {
        self.top_combinations = Some(limit);
        self
    }

    /// Set the number of two-character word beginnings to report
    pub fn top_beginnings(mut self, limit: usize) -> Self {
        self.top_beginnings = Some(limit);
        self
    }

    /// Include or skip non-Telugu singleton syllables
    pub fn count_other_syllables(mut self, enabled: bool) -> Self {
        self.count_other_syllables = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::default();

        if let Some(limit) = self.top_syllables {
            config.top_syllables = limit;
        }
        if let Some(limit) = self.top_consonants {
            config.top_consonants = limit;
        }
        if let Some(limit) = self.top_vowels {
            config.top_vowels = limit;
        }
        if let Some(limit) = self.top_combinations {
            config.top_combinations = limit;
        }
        if let Some(limit) = self.top_beginnings {
            config.top_beginnings = limit;
        }
        if let Some(enabled) = self.count_other_syllables {
            config.count_other_syllables = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
