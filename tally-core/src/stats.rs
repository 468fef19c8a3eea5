//! Text statistics and the analyzer that produces them

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::config::Config;
use crate::counters::{count_paragraphs, count_words, reading_minutes};
use crate::segmenter::{Sentence, SentenceSegmenter};

/// Statistics for one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of sentences, always equal to `sentences.len()`
    pub sentence_count: usize,
    /// Recognized sentences in order
    pub sentences: Vec<Sentence>,
    /// Number of whitespace-separated words
    pub word_count: usize,
    /// Number of blank-line separated paragraphs
    pub paragraph_count: usize,
    /// Estimated reading time in whole minutes
    pub reading_minutes: u64,
}

impl TextStats {
    /// Sentence texts in order
    pub fn spans(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    /// Average number of words per sentence, 0.0 without sentences
    pub fn words_per_sentence(&self) -> f64 {
        if self.sentence_count == 0 {
            0.0
        } else {
            self.word_count as f64 / self.sentence_count as f64
        }
    }
}

/// Computes [`TextStats`] with a fixed configuration
///
/// # Example
///
/// ```rust
/// use tally_core::TextAnalyzer;
///
/// let analyzer = TextAnalyzer::new();
/// let stats = analyzer.analyze("Dr. Smith went home. He slept.");
///
/// assert_eq!(stats.sentence_count, 2);
/// assert_eq!(stats.word_count, 6);
/// assert_eq!(stats.reading_minutes, 1);
/// ```
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    segmenter: SentenceSegmenter,
    words_per_minute: NonZeroU32,
}

impl TextAnalyzer {
    /// Analyzer with the default configuration
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Analyzer following `config`
    pub fn with_config(config: &Config) -> Self {
        Self {
            segmenter: SentenceSegmenter::from_config(config),
            words_per_minute: config.words_per_minute(),
        }
    }

    /// Underlying segmenter
    pub fn segmenter(&self) -> &SentenceSegmenter {
        &self.segmenter
    }

    /// Compute statistics for `text`
    pub fn analyze(&self, text: &str) -> TextStats {
        let sentences = self.segmenter.segment(text).into_sentences();
        let word_count = count_words(text);
        let stats = TextStats {
            sentence_count: sentences.len(),
            sentences,
            word_count,
            paragraph_count: count_paragraphs(text),
            reading_minutes: reading_minutes(word_count, self.words_per_minute),
        };

        log::debug!(
            "analyzed {} chars: {} sentences, {} words, {} paragraphs",
            text.chars().count(),
            stats.sentence_count,
            stats.word_count,
            stats.paragraph_count
        );

        stats
    }

    /// Compute statistics for an optional text, treating `None` as empty
    pub fn analyze_opt(&self, text: Option<&str>) -> TextStats {
        self.analyze(text.unwrap_or_default())
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
