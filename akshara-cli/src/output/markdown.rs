//! Markdown output formatter

use super::{join_syllables, OutputFormatter};
use akshara_core::Syllable;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs words as a numbered markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()> {
        self.word_count += 1;
        writeln!(
            self.writer,
            "{}. **{}**: {}",
            self.word_count,
            word,
            join_syllables(syllables)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akshara_core::extract_syllables;

    #[test]
    fn test_numbered_list_with_footer() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_word("అమ్మ", &extract_syllables("అమ్మ")).unwrap();
            formatter.finish().unwrap();
        }
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.starts_with("1. **అమ్మ**: అ | మ్మ\n"));
        assert!(out.ends_with("---\n*Total words: 1*\n"));
    }
}
