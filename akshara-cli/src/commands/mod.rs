//! CLI command implementations

use akshara_core::{CharacterClass, CONSONANT_RANGE, VIRAMA, VOWEL_RANGE, VOWEL_SIGN_RANGE};
use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split words into aksharas (syllables)
    Split(split::SplitArgs),

    /// Count syllables across a word list and report frequencies
    Analyze(analyze::AnalyzeArgs),

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the character classes and their codepoint ranges
    Classes,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Analyze(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(&mut io::stdout().lock()),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    writeln!(writer, "{:<10} {}", format.as_str(), format.description())?;
                }
            }
            ListCommands::Classes => {
                let rows = [
                    (CharacterClass::Vowel, describe_range(&VOWEL_RANGE)),
                    (CharacterClass::Consonant, describe_range(&CONSONANT_RANGE)),
                    (CharacterClass::VowelSign, describe_range(&VOWEL_SIGN_RANGE)),
                    (CharacterClass::Virama, format!("U+{:04X}", VIRAMA as u32)),
                    (CharacterClass::Other, "everything else".to_string()),
                ];
                for (class, range) in rows {
                    writeln!(writer, "{:<10} {}", format!("{class:?}"), range)?;
                }
            }
        }
        Ok(())
    }
}

fn describe_range(range: &RangeInclusive<char>) -> String {
    format!(
        "U+{:04X}..U+{:04X}",
        *range.start() as u32,
        *range.end() as u32
    )
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Open the output destination: a file when given, stdout otherwise
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
