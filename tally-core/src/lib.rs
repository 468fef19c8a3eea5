//! Rule-based sentence, word and paragraph statistics
//!
//! The heart of this crate is a sentence-boundary heuristic: a single
//! left-to-right scan that decides, for every `.`, `!` and `?`, whether it
//! ends a sentence. Dots inside numbers, domain names, known abbreviations
//! and initials are rejected, as are dots followed by a lowercase word.
//! Around it sit word and paragraph counters and a reading-time estimate.
//!
//! Every function here is total: empty, blank or unusual input yields zero
//! counts, never an error. Only building a [`Config`] can fail.
//!
//! # Example
//!
//! ```rust
//! use tally_core::{segment, Config, RuleSet, TextAnalyzer};
//!
//! let result = segment("J. K. Rowling wrote it. Visit openai.com for more.");
//! assert_eq!(result.count(), 2);
//!
//! let config = Config::builder()
//!     .rule_set(RuleSet::Full)
//!     .words_per_minute(200)
//!     .build()
//!     .unwrap();
//! let stats = TextAnalyzer::with_config(&config).analyze("3.14 is pi.\n\nIt is.");
//! assert_eq!(stats.sentence_count, 2);
//! assert_eq!(stats.paragraph_count, 2);
//! ```

pub mod config;
pub mod counters;
pub mod error;
pub mod normalize;
pub mod sample;
pub mod segmenter;
pub mod stats;
pub mod tables;

pub use config::{Config, ConfigBuilder, RuleSet};
pub use counters::{count_paragraphs, count_words, estimate_reading_minutes, reading_minutes};
pub use error::{Error, Result};
pub use sample::SAMPLE_TEXT;
pub use segmenter::{segment, BoundaryDecision, Guard, Segmentation, Sentence, SentenceSegmenter};
pub use stats::{TextAnalyzer, TextStats};
