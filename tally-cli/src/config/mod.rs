//! Configuration file support
//!
//! A `tally.toml` file has three optional tables:
//!
//! ```toml
//! [segmentation]
//! rule_set = "full"
//! collapse_terminators = false
//! extra_abbreviations = ["approx", "inc"]
//!
//! [reading]
//! words_per_minute = 220
//!
//! [output]
//! default_format = "text"
//! pretty_json = true
//! show_sentences = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tally_core::config::defaults;
use tally_core::{Config, RuleSet};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Reading-time configuration
    #[serde(default)]
    pub reading: ReadingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentationConfig {
    /// Rule set: "full" or "basic"
    pub rule_set: RuleSet,

    /// Count "?!" style runs as one sentence end
    pub collapse_terminators: bool,

    /// Abbreviations added to the built-in table
    pub extra_abbreviations: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::default(),
            collapse_terminators: defaults::COLLAPSE_TERMINATORS,
            extra_abbreviations: Vec::new(),
        }
    }
}

/// Reading-time configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReadingConfig {
    /// Reading speed in words per minute
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: defaults::WORDS_PER_MINUTE,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// List each sentence after the counts
    pub show_sentences: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            show_sentences: false,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the file if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build the core analysis configuration
    pub fn core_config(&self) -> Result<Config> {
        Config::builder()
            .rule_set(self.segmentation.rule_set)
            .collapse_terminators(self.segmentation.collapse_terminators)
            .words_per_minute(self.reading.words_per_minute)
            .extra_abbreviations(self.segmentation.extra_abbreviations.iter().cloned())
            .build()
            .map_err(|e| match e {
                tally_core::Error::Configuration(msg) => CliError::ConfigError(msg).into(),
                other => CliError::ConfigError(other.to_string()).into(),
            })
    }
}
