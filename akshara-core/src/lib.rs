//! Telugu akshara segmentation
//!
//! Splits Telugu-script text into orthographic syllables (aksharas) by
//! classifying each codepoint and merging the classified stream with a
//! small linear-scan state machine. Conjuncts joined by a virama stay in
//! one syllable, vowel signs attach to the preceding consonant, and
//! independent vowels always stand alone.
//!
//! # Architecture
//!
//! - **Domain layer**: codepoint classification and the syllable builder
//! - **Analysis layer**: frequency tallies and reports built on top of the
//!   segmenter output
//!
//! # Example
//!
//! ```rust
//! use akshara_core::extract_syllables;
//!
//! let syllables = extract_syllables("అమ్మ");
//! let rendered: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();
//! assert_eq!(rendered, vec!["అ", "మ్మ"]);
//! ```

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;

pub use analysis::{
    AnalysisReport, Analyzer, CharLengthBucket, RankedItem, SyllableFrequency, Tally, WordExtent,
    WordLengthBucket,
};
pub use config::{AnalysisConfig, ConfigBuilder};
pub use domain::*;
pub use error::{Error, Result};
