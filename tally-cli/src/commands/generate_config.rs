//! Generate config command implementation

use anyhow::{bail, Context};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tally_core::config::defaults;

use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "tally.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust rules and reading speed");
        println!("2. Validate it:");
        println!("   tally validate -c {}", self.output.display());
        println!("3. Use it:");
        println!("   tally stats -i input.txt -c {}", self.output.display());

        Ok(())
    }
}

/// Commented template holding the default values
pub fn template() -> String {
    format!(
        r#"# tally configuration

[segmentation]
# "full" applies every guard; "basic" skips the initials and
# lowercase-continuation guards
rule_set = "full"

# Count a run such as "?!" as a single sentence end
collapse_terminators = {collapse}

# Abbreviations whose trailing dot never ends a sentence, on top of the
# built-in list (case-insensitive, final dot optional)
extra_abbreviations = []

[reading]
words_per_minute = {wpm}

[output]
# "text", "json" or "markdown"
default_format = "text"
pretty_json = true
show_sentences = false
"#,
        collapse = defaults::COLLAPSE_TERMINATORS,
        wpm = defaults::WORDS_PER_MINUTE,
    )
}
