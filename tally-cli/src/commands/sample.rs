//! Sample command implementation

use anyhow::Result;
use std::io::{self, Write};
use tally_core::SAMPLE_TEXT;

use crate::error::CliResult;

/// Print the built-in sample text to stdout
pub fn execute() -> CliResult<()> {
    write_sample(io::stdout().lock())
}

fn write_sample<W: Write>(mut writer: W) -> Result<()> {
    writeln!(writer, "{SAMPLE_TEXT}")?;
    writer.flush()?;
    Ok(())
}
