//! Configuration API for text analysis

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Average adult silent reading speed used for the estimate
    pub const WORDS_PER_MINUTE: u32 = 220;

    /// Reference behaviour counts every terminator of a run separately
    pub const COLLAPSE_TERMINATORS: bool = false;
}

/// Named selection of boundary guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Every guard: decimal, domain, abbreviation, initials, lowercase continuation
    #[default]
    Full,
    /// Decimal, domain and abbreviation guards only
    Basic,
}

impl RuleSet {
    /// All rule sets, in display order
    pub const ALL: [RuleSet; 2] = [RuleSet::Full, RuleSet::Basic];

    /// Lowercase name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Full => "full",
            RuleSet::Basic => "basic",
        }
    }

    /// One-line description for listings
    pub fn description(self) -> &'static str {
        match self {
            RuleSet::Full => "all guards, including initials and lowercase continuation",
            RuleSet::Basic => "decimal, domain and abbreviation guards only",
        }
    }

    /// Whether "J." style initials suppress a boundary
    pub fn checks_initials(self) -> bool {
        matches!(self, RuleSet::Full)
    }

    /// Whether a following lowercase letter suppresses a boundary
    pub fn checks_lowercase_continuation(self) -> bool {
        matches!(self, RuleSet::Full)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(RuleSet::Full),
            "basic" => Ok(RuleSet::Basic),
            _ => Err(Error::InvalidRuleSet(s.to_string())),
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) rule_set: RuleSet,
    pub(crate) collapse_terminators: bool,
    pub(crate) words_per_minute: NonZeroU32,
    pub(crate) extra_abbreviations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::default(),
            collapse_terminators: defaults::COLLAPSE_TERMINATORS,
            words_per_minute: NonZeroU32::new(defaults::WORDS_PER_MINUTE)
                .unwrap_or(NonZeroU32::MIN),
            extra_abbreviations: Vec::new(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected rule set
    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Whether runs like "?!" end a single sentence
    pub fn collapse_terminators(&self) -> bool {
        self.collapse_terminators
    }

    /// Reading speed used for the time estimate
    pub fn words_per_minute(&self) -> NonZeroU32 {
        self.words_per_minute
    }

    /// Normalized abbreviations added on top of the built-in table
    pub fn extra_abbreviations(&self) -> &[String] {
        &self.extra_abbreviations
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    rule_set: Option<RuleSet>,
    collapse_terminators: Option<bool>,
    words_per_minute: Option<u32>,
    extra_abbreviations: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule set
    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = Some(rule_set);
        self
    }

    /// Set the rule set by name ("full" or "basic")
    pub fn rule_set_name(mut self, name: &str) -> Result<Self> {
        self.rule_set = Some(name.parse()?);
        Ok(self)
    }

    /// Fold terminator runs such as "?!" into one sentence end
    pub fn collapse_terminators(mut self, collapse: bool) -> Self {
        self.collapse_terminators = Some(collapse);
        self
    }

    /// Set the reading speed in words per minute
    pub fn words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = Some(wpm);
        self
    }

    /// Add abbreviations on top of the built-in table
    pub fn extra_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_abbreviations
            .extend(abbreviations.into_iter().map(Into::into));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(rule_set) = self.rule_set {
            config.rule_set = rule_set;
        }

        if let Some(collapse) = self.collapse_terminators {
            config.collapse_terminators = collapse;
        }

        if let Some(wpm) = self.words_per_minute {
            config.words_per_minute = NonZeroU32::new(wpm).ok_or_else(|| {
                Error::Configuration("words_per_minute must be greater than 0".into())
            })?;
        }

        for raw in self.extra_abbreviations {
            let normalized = normalize_abbreviation(&raw);
            if normalized.is_empty() {
                return Err(Error::Configuration(format!(
                    "abbreviation {raw:?} is empty after normalization"
                )));
            }
            if !config.extra_abbreviations.contains(&normalized) {
                config.extra_abbreviations.push(normalized);
            }
        }

        Ok(config)
    }
}

/// Trim whitespace and surrounding dots, then lowercase
pub(crate) fn normalize_abbreviation(raw: &str) -> String {
    raw.trim().trim_matches('.').to_lowercase()
}
