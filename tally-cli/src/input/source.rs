//! Where a text to analyze comes from

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tally_core::SAMPLE_TEXT;

use super::FileReader;

/// One text to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// The built-in sample text
    Sample,
}

impl InputSource {
    /// Label used in reports
    pub fn label(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Sample => "<sample>".to_string(),
        }
    }

    /// Read the whole text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Stdin => FileReader::read_all(io::stdin().lock(), "stdin"),
            InputSource::Sample => Ok(SAMPLE_TEXT.to_string()),
        }
    }
}
