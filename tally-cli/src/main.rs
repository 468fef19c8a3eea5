//! tally command-line entry point

use clap::Parser;
use tally_cli::commands::Commands;
use tally_cli::CliResult;

/// Sentence, word and paragraph statistics for plain text
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
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
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["tally", "list", "rules"]).unwrap();
        assert!(matches!(cli.command, Commands::List { .. }));

        let cli = Cli::try_parse_from(["tally", "stats", "--sample", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats(_)));

        assert!(Cli::try_parse_from(["tally", "stats", "-r", "strict"]).is_err());
    }
}
