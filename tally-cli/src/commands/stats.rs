//! Stats command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tally_core::{RuleSet, TextAnalyzer, TextStats};

use super::init_logging;
use crate::config::{CliConfig, OutputConfig};
use crate::error::CliResult;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "sample")]
    pub input: Vec<String>,

    /// Analyze the built-in sample text
    #[arg(long)]
    pub sample: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's choice]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rule set for sentence detection [default: full]
    #[arg(short, long, value_enum)]
    pub rules: Option<RuleSetArg>,

    /// Count a run such as "?!" as a single sentence end
    #[arg(long)]
    pub collapse_terminators: bool,

    /// Reading speed in words per minute [default: 220]
    #[arg(long, value_name = "N")]
    pub wpm: Option<u32>,

    /// List every sentence after the counts
    #[arg(short, long)]
    pub sentences: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Rule sets selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleSetArg {
    /// Every guard, including initials and lowercase continuation
    Full,
    /// Decimal, domain and abbreviation guards only
    Basic,
}

impl From<RuleSetArg> for RuleSet {
    fn from(arg: RuleSetArg) -> Self {
        match arg {
            RuleSetArg::Full => RuleSet::Full,
            RuleSetArg::Basic => RuleSet::Basic,
        }
    }
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let analyzer = TextAnalyzer::with_config(&settings.core_config()?);
        let sources = self.sources()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let reports = sources
            .par_iter()
            .map(|source| -> Result<(String, TextStats)> {
                let label = source.label();
                let text = source.read()?;
                let stats = analyzer.analyze(&text);
                progress.file_completed(&label);
                Ok((label, stats))
            })
            .collect::<Result<Vec<_>>>();
        progress.finish();
        let reports = reports?;

        let writer = self.open_writer()?;
        let mut formatter = build_formatter(&settings.output, writer, reports.len() > 1);
        for (label, stats) in &reports {
            formatter.format_document(label, stats)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} input(s)", reports.len());
        Ok(())
    }

    /// Config file contents with command-line overrides applied
    pub fn settings(&self) -> Result<CliConfig> {
        let mut settings = CliConfig::load(self.config.as_deref())?;

        if let Some(rules) = self.rules {
            settings.segmentation.rule_set = rules.into();
        }
        if self.collapse_terminators {
            settings.segmentation.collapse_terminators = true;
        }
        if let Some(wpm) = self.wpm {
            settings.reading.words_per_minute = wpm;
        }
        if let Some(format) = self.format {
            settings.output.default_format = format;
        }
        if self.sentences {
            settings.output.show_sentences = true;
        }

        Ok(settings)
    }

    /// Texts to analyze, in output order
    pub fn sources(&self) -> Result<Vec<InputSource>> {
        if self.sample {
            return Ok(vec![InputSource::Sample]);
        }
        if self.input.is_empty() {
            return Ok(vec![InputSource::Stdin]);
        }

        Ok(resolve_patterns(&self.input)?
            .into_iter()
            .map(InputSource::File)
            .collect())
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

fn build_formatter<W>(output: &OutputConfig, writer: W, many: bool) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match output.default_format {
        OutputFormat::Text => {
            Box::new(TextFormatter::new(writer, output.show_sentences).with_headers(many))
        }
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            output.pretty_json,
            output.show_sentences,
        )),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, output.show_sentences)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: StatsArgs,
    }

    fn parse(argv: &[&str]) -> StatsArgs {
        let mut full = vec!["tally"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let settings = args.settings().unwrap();

        assert_eq!(settings, CliConfig::default());
        assert_eq!(args.sources().unwrap(), vec![InputSource::Stdin]);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("tally.toml");
        fs::write(
            &config_path,
            "[segmentation]\nrule_set = \"basic\"\n[reading]\nwords_per_minute = 100\n[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();

        let args = parse(&[
            "-c",
            config_path.to_str().unwrap(),
            "-r",
            "full",
            "--wpm",
            "300",
            "--collapse-terminators",
            "-s",
        ]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.segmentation.rule_set, RuleSet::Full);
        assert!(settings.segmentation.collapse_terminators);
        assert_eq!(settings.reading.words_per_minute, 300);
        assert_eq!(settings.output.default_format, OutputFormat::Json);
        assert!(settings.output.show_sentences);
    }

    #[test]
    fn test_sample_source() {
        let args = parse(&["--sample"]);
        assert_eq!(args.sources().unwrap(), vec![InputSource::Sample]);
    }

    #[test]
    fn test_sample_conflicts_with_input() {
        let result = TestCli::try_parse_from(["tally", "--sample", "-i", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_sources_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "B.").unwrap();
        fs::write(dir.path().join("a.txt"), "A.").unwrap();
        let pattern = dir.path().join("*.txt").to_string_lossy().into_owned();

        let args = parse(&["-i", &pattern]);
        assert_eq!(
            args.sources().unwrap(),
            vec![
                InputSource::File(dir.path().join("a.txt")),
                InputSource::File(dir.path().join("b.txt")),
            ]
        );
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.json");
        fs::write(&input, "Dr. Smith went home. He slept.").unwrap();

        let args = parse(&[
            "-q",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-f",
            "json",
        ]);
        args.execute().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"sentence_count\": 2"));
        assert!(written.contains("\"word_count\": 6"));
    }

    #[test]
    fn test_rule_set_arg_conversion() {
        assert_eq!(RuleSet::from(RuleSetArg::Full), RuleSet::Full);
        assert_eq!(RuleSet::from(RuleSetArg::Basic), RuleSet::Basic);
    }
}
