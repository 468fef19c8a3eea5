//! List command implementation

use anyhow::Result;
use std::io::{self, Write};
use tally_core::RuleSet;

use super::ListCommands;
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Print the requested listing to stdout
pub fn execute(what: ListCommands) -> CliResult<()> {
    write_listing(what, io::stdout().lock())
}

fn write_listing<W: Write>(what: ListCommands, mut writer: W) -> Result<()> {
    match what {
        ListCommands::Rules => {
            writeln!(writer, "Available rule sets:")?;
            for rule_set in RuleSet::ALL {
                let marker = if rule_set == RuleSet::default() {
                    " (default)"
                } else {
                    ""
                };
                writeln!(
                    writer,
                    "  {:<8} {}{}",
                    rule_set.name(),
                    rule_set.description(),
                    marker
                )?;
            }
        }
        ListCommands::Formats => {
            writeln!(writer, "Available output formats:")?;
            for format in OutputFormat::ALL {
                writeln!(writer, "  {:<8} {}", format.name(), format.description())?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(what: ListCommands) -> String {
        let mut buffer = Vec::new();
        write_listing(what, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_rules_listing() {
        let output = listing(ListCommands::Rules);
        assert!(output.starts_with("Available rule sets:\n"));
        assert!(output.contains("  full     all guards"));
        assert!(output.contains("(default)"));
        assert!(output.contains("  basic    "));
    }

    #[test]
    fn test_formats_listing() {
        let output = listing(ListCommands::Formats);
        for name in ["text", "json", "markdown"] {
            assert!(output.contains(name));
        }
    }
}
