//! Plain text output formatter

use super::{join_syllables, OutputFormatter};
use akshara_core::Syllable;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one word per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()> {
        writeln!(self.writer, "{}: {}", word, join_syllables(syllables))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
