//! JSON output formatter

use super::OutputFormatter;
use akshara_core::Syllable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segmented words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The input word
    pub word: String,
    /// Its syllables, in order
    pub syllables: Vec<String>,
    /// Number of syllables
    pub count: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()> {
        self.words.push(WordData {
            word: word.to_string(),
            syllables: syllables.iter().map(|s| s.to_string()).collect(),
            count: syllables.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akshara_core::extract_syllables;

    #[test]
    fn test_json_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_word("కమలం", &extract_syllables("కమలం")).unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<WordData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].word, "కమలం");
        assert_eq!(parsed[0].syllables, vec!["క", "మ", "ల", "ం"]);
        assert_eq!(parsed[0].count, 4);
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
