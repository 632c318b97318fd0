//! akshara command-line entry point

use akshara_cli::commands::Commands;
use akshara_cli::CliResult;
use clap::Parser;

/// Telugu akshara (syllable) segmentation and frequency analysis
#[derive(Debug, Parser)]
#[command(name = "akshara", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_split_arguments() {
        let cli = Cli::try_parse_from(["akshara", "split", "-w", "అమ్మ", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.input.words, vec!["అమ్మ"]);
                assert!(args.format.is_some());
            }
            other => panic!("expected split, got {other:?}"),
        }
    }
}
