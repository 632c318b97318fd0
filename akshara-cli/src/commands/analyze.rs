//! Analyze command implementation

use super::{init_logging, open_output};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{collect_words, InputArgs};
use crate::output::{write_report, OutputFormat};
use crate::progress::ProgressReporter;
use akshara_core::{Analyzer, ConfigBuilder};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
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

    /// Number of most frequent syllables to list
    #[arg(short, long, value_name = "N")]
    pub top: Option<usize>,

    /// Leave digits, punctuation and other non-Telugu syllables out of the counts
    #[arg(long)]
    pub skip_other: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.format.unwrap_or(config.output.default_format);

        let mut builder = ConfigBuilder::from_config(&config.analysis);
        if let Some(top) = self.top {
            builder = builder.top_syllables(top);
        }
        if self.skip_other {
            builder = builder.count_other_syllables(false);
        }
        let analysis = builder.build().map_err(CliError::from)?;

        let mut progress = ProgressReporter::new(self.quiet);
        let words = collect_words(&self.input, &mut progress)?;

        let mut analyzer = Analyzer::with_config(analysis);
        analyzer.add_words(&words);
        let report = analyzer.report();
        log::info!(
            "Analyzed {} word(s): {} syllable occurrence(s), {} unique",
            report.total_words,
            report.total_syllables,
            report.unique_syllables
        );

        let mut writer = open_output(self.output.as_deref())?;
        write_report(&mut writer, &report, format, config.output.pretty_json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(words: &[&str], output: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            input: InputArgs {
                words: words.iter().map(|w| w.to_string()).collect(),
                ..Default::default()
            },
            output: Some(output),
            format: Some(OutputFormat::Json),
            config: None,
            top: None,
            skip_other: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_analyze_json() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.json");

        args_for(&["అమ్మ", "అమ్మ", "కమలం"], output.clone())
            .execute()
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["total_words"], 3);
        assert_eq!(value["total_syllables"], 8);
        assert_eq!(value["top_syllables"][0]["item"], "అ");
    }

    #[test]
    fn test_top_limit() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.json");

        let mut args = args_for(&["సంస్కృతి"], output.clone());
        args.top = Some(1);
        args.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["unique_syllables"], 4);
        assert_eq!(value["top_syllables"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_zero_top_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args_for(&["అమ్మ"], temp_dir.path().join("report.json"));
        args.top = Some(0);

        let err = args.execute().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: top_syllables must be greater than 0"
        );
    }

    #[test]
    fn test_skip_other() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.json");

        let mut args = args_for(&["స్నేహం"], output.clone());
        args.skip_other = true;
        args.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["total_syllables"], 2);
    }
}
