//! Gathering words from files, arguments, the sample list or stdin

use super::{resolve_patterns, FileReader};
use crate::error::CliError;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use std::io::{self, Read};

/// Sample words covering plain consonants, matras, conjuncts and anusvara
pub const DEMO_WORDS: &[&str] = &[
    "మనిషి",
    "కమలం",
    "వాక్యం",
    "అమ్మ",
    "ప్రేమ",
    "స్నేహం",
    "ప్రకృతి",
    "సంస్కృతి",
];

/// Where words come from
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Word to segment (repeatable)
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Use the built-in sample word list
    #[arg(long)]
    pub demo: bool,
}

impl InputArgs {
    /// Whether no source was given, meaning stdin is read
    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.words.is_empty() && !self.demo
    }
}

/// Split text into whitespace-separated words
pub fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_string)
}

/// Collect words from every source in `args`, falling back to stdin
pub fn collect_words(args: &InputArgs, progress: &mut ProgressReporter) -> Result<Vec<String>> {
    if args.is_empty() {
        log::info!("No input given, reading words from stdin");
        return read_stdin_words(io::stdin().lock());
    }

    let mut words = Vec::new();

    if args.demo {
        words.extend(DEMO_WORDS.iter().map(|w| w.to_string()));
    }

    for arg in &args.words {
        words.extend(split_words(arg));
    }

    if !args.input.is_empty() {
        let files = resolve_patterns(&args.input)?;
        log::info!("Resolved {} input file(s)", files.len());

        progress.init_files(files.len() as u64);
        for path in &files {
            let text = FileReader::read_text(path)?;
            let before = words.len();
            words.extend(split_words(&text));
            log::debug!("{}: {} word(s)", path.display(), words.len() - before);
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();
    }

    Ok(words)
}

fn read_stdin_words<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| CliError::InputError(format!("failed to read stdin: {e}")))?;
    Ok(split_words(&text).collect())
}
