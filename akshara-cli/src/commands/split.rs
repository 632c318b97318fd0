//! Split command implementation

use super::{init_logging, open_output};
use crate::config::CliConfig;
use crate::input::{collect_words, InputArgs};
use crate::output::{word_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use akshara_core::extract_syllables;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.format.unwrap_or(config.output.default_format);

        let mut progress = ProgressReporter::new(self.quiet);
        let words = collect_words(&self.input, &mut progress)?;
        log::info!("Splitting {} word(s)", words.len());

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = word_formatter(format, writer, config.output.pretty_json);
        for word in &words {
            let syllables = extract_syllables(word);
            log::trace!("{word}: {} syllable(s)", syllables.len());
            formatter.format_word(word, &syllables)?;
        }
        formatter.finish()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_split_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let args = SplitArgs {
            input: InputArgs {
                words: vec!["అమ్మ".to_string(), "ప్రకృతి".to_string()],
                ..Default::default()
            },
            output: Some(output.clone()),
            format: None,
            config: None,
            quiet: true,
            verbose: 0,
        };
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "అమ్మ: అ | మ్మ\nప్రకృతి: ప్ర | కృ | తి\n");
    }

    #[test]
    fn test_split_uses_config_format() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("akshara.toml");
        fs::write(&config_path, "[output]\ndefault_format = \"json\"\npretty_json = false\n").unwrap();
        let output = temp_dir.path().join("out.json");

        let args = SplitArgs {
            input: InputArgs {
                words: vec!["కమలం".to_string()],
                ..Default::default()
            },
            output: Some(output.clone()),
            format: None,
            config: Some(config_path),
            quiet: true,
            verbose: 0,
        };
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content.trim(),
            r#"[{"word":"కమలం","syllables":["క","మ","ల","ం"],"count":4}]"#
        );
    }
}
