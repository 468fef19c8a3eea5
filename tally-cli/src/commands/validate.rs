//! Validate command implementation

use anyhow::anyhow;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        let loaded = CliConfig::from_file(&self.config).and_then(|cli| {
            let core = cli.core_config()?;
            Ok((cli, core))
        });

        match loaded {
            Ok((cli, core)) => {
                println!("✓ Configuration is valid!");
                println!("  Rule set:             {}", core.rule_set());
                println!("  Collapse terminators: {}", core.collapse_terminators());
                println!("  Extra abbreviations:  {}", core.extra_abbreviations().len());
                println!("  Words per minute:     {}", core.words_per_minute());
                println!("  Output format:        {}", cli.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow!("Validation failed: {e}"))
            }
        }
    }
}
