//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_core::TextStats;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the statistics of one input
    fn format_document(&mut self, source: &str, stats: &TextStats) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled counts, one per line
    Text,
    /// JSON array with one object per input
    Json,
    /// Markdown table per input
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Lowercase name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for listings
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "labelled counts, one per line",
            OutputFormat::Json => "JSON array with one object per input",
            OutputFormat::Markdown => "Markdown table per input",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
