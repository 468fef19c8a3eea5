//! Word, paragraph and reading-time counters

use regex::Regex;
use std::num::NonZeroU32;
use std::sync::LazyLock;

use crate::config::defaults;
use crate::normalize::normalize_line_endings;

/// Two or more consecutive newlines separate paragraphs
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Count maximal runs of non-whitespace characters
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count paragraphs separated by blank lines
///
/// A paragraph break is two or more consecutive newlines; segments holding
/// only whitespace are not counted.
pub fn count_paragraphs(text: &str) -> usize {
    let normalized = normalize_line_endings(text);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return 0;
    }

    PARAGRAPH_BREAK
        .split(trimmed)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Estimated reading time in whole minutes
///
/// Zero words read in zero minutes; any other count takes at least a minute.
pub fn reading_minutes(word_count: usize, words_per_minute: NonZeroU32) -> u64 {
    if word_count == 0 {
        return 0;
    }

    let minutes = (word_count as f64 / f64::from(words_per_minute.get())).round() as u64;
    minutes.max(1)
}

/// Estimated reading time at the default speed
pub fn estimate_reading_minutes(word_count: usize) -> u64 {
    let wpm = NonZeroU32::new(defaults::WORDS_PER_MINUTE).unwrap_or(NonZeroU32::MIN);
    reading_minutes(word_count, wpm)
}
