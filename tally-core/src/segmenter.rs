//! Rule-based sentence segmentation
//!
//! The segmenter walks the text once, left to right. Every terminator
//! candidate (`.`, `!`, `?`) is run through an ordered list of guards; the
//! first guard that matches rejects the candidate, and a candidate no guard
//! rejects closes the current sentence.
//!
//! Guard order for `.`:
//!
//! 1. decimal (`3.14`)
//! 2. domain or file name (`openai.com`)
//! 3. known abbreviation (`Dr.`, `e.g.`)
//! 4. initials (`J. K.`), full rule set only
//! 5. lowercase continuation (`approx. ten`), full rule set only
//!
//! `?` and `!` are always accepted.

use serde::{Deserialize, Serialize};

use crate::config::{Config, RuleSet};
use crate::normalize::normalize_line_endings;
use crate::tables::{ellipsis_len, is_closing, is_terminator, AbbrevTable};

/// Guard that rejected a terminator candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Digit on both sides of the dot
    Decimal,
    /// Dot inside a token such as a domain name or file extension
    Domain,
    /// Dot ends a known abbreviation
    Abbreviation,
    /// Dot follows a standalone capital letter
    Initials,
    /// Next non-whitespace character is lowercase
    LowercaseContinuation,
}

/// Decision about a terminator candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDecision {
    /// Ends the current sentence
    Accept,
    /// Not a boundary
    Reject(Guard),
}

/// A recognized sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text with surrounding whitespace trimmed
    pub text: String,
    /// Character offset of the first non-whitespace character in the
    /// line-ending normalized input
    pub offset: usize,
}

/// Result of segmenting a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    sentences: Vec<Sentence>,
}

impl Segmentation {
    /// Number of sentences
    pub fn count(&self) -> usize {
        self.sentences.len()
    }

    /// True when no sentence was found
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentence texts in order
    pub fn spans(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    /// Sentences with offsets
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Consume into the sentence list
    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }
}

/// Sentence segmenter with a fixed rule set
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    rule_set: RuleSet,
    collapse_terminators: bool,
    abbreviations: AbbrevTable,
}

impl SentenceSegmenter {
    /// Segmenter with the full rule set and built-in abbreviations
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter following the segmentation settings of `config`
    pub fn from_config(config: &Config) -> Self {
        Self {
            rule_set: config.rule_set(),
            collapse_terminators: config.collapse_terminators(),
            abbreviations: AbbrevTable::with_extra(config.extra_abbreviations()),
        }
    }

    /// Active rule set
    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Split `text` into sentences
    pub fn segment(&self, text: &str) -> Segmentation {
        if text.is_empty() {
            return Segmentation::default();
        }

        let normalized = normalize_line_endings(text);
        let chars: Vec<char> = normalized.chars().collect();

        let mut sentences = Vec::new();
        let mut buffer = String::new();
        let mut buffer_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let ellipsis = ellipsis_len(&chars, i);
            if ellipsis > 0 {
                buffer.extend(&chars[i..i + ellipsis]);
                i += ellipsis;
                continue;
            }

            let ch = chars[i];
            buffer.push(ch);
            i += 1;

            if !is_terminator(ch) {
                continue;
            }

            if let BoundaryDecision::Reject(guard) = self.classify(&chars, i - 1) {
                log::trace!("'{ch}' at char {} rejected by {guard:?} guard", i - 1);
                continue;
            }

            if self.collapse_terminators {
                while let Some(&next) = chars.get(i) {
                    if !is_terminator(next) {
                        break;
                    }
                    buffer.push(next);
                    i += 1;
                }
            }

            while let Some(&next) = chars.get(i) {
                if !is_closing(next) {
                    break;
                }
                buffer.push(next);
                i += 1;
            }

            push_sentence(&mut sentences, &buffer, buffer_start);
            buffer.clear();
            buffer_start = i;
        }

        if buffer.chars().any(char::is_alphanumeric) {
            push_sentence(&mut sentences, &buffer, buffer_start);
        }

        Segmentation { sentences }
    }

    /// Classify the terminator at `chars[pos]`
    ///
    /// Returns `None` when `pos` is out of range or does not hold a
    /// terminator.
    pub fn decide(&self, chars: &[char], pos: usize) -> Option<BoundaryDecision> {
        let &ch = chars.get(pos)?;
        is_terminator(ch).then(|| self.classify(chars, pos))
    }

    /// Guard chain for a terminator known to sit at `chars[pos]`
    fn classify(&self, chars: &[char], pos: usize) -> BoundaryDecision {
        if chars[pos] != '.' {
            return BoundaryDecision::Accept;
        }

        let prev = pos.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(pos + 1).copied();

        if let (Some(p), Some(n)) = (prev, next) {
            if p.is_ascii_digit() && n.is_ascii_digit() {
                return BoundaryDecision::Reject(Guard::Decimal);
            }
        }

        if prev.is_some_and(char::is_alphanumeric) && next.is_some_and(char::is_alphabetic) {
            return BoundaryDecision::Reject(Guard::Domain);
        }

        if self.abbreviations.ends_abbreviation(chars, pos) {
            return BoundaryDecision::Reject(Guard::Abbreviation);
        }

        if self.rule_set.checks_initials() && follows_initial(chars, pos) {
            return BoundaryDecision::Reject(Guard::Initials);
        }

        if self.rule_set.checks_lowercase_continuation()
            && next_non_whitespace(chars, pos + 1).is_some_and(char::is_lowercase)
        {
            return BoundaryDecision::Reject(Guard::LowercaseContinuation);
        }

        BoundaryDecision::Accept
    }
}

/// Split `text` with the default segmenter
pub fn segment(text: &str) -> Segmentation {
    SentenceSegmenter::new().segment(text)
}

/// True when the dot at `pos` follows a single standalone capital letter
fn follows_initial(chars: &[char], pos: usize) -> bool {
    let Some(letter_pos) = pos.checked_sub(1) else {
        return false;
    };

    if !chars[letter_pos].is_uppercase() {
        return false;
    }

    letter_pos
        .checked_sub(1)
        .map_or(true, |before| !chars[before].is_alphanumeric())
}

fn next_non_whitespace(chars: &[char], from: usize) -> Option<char> {
    chars
        .get(from..)?
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
}

fn push_sentence(sentences: &mut Vec<Sentence>, buffer: &str, buffer_start: usize) {
    let text = buffer.trim();
    if text.is_empty() {
        return;
    }

    let leading = buffer.chars().take_while(|c| c.is_whitespace()).count();
    sentences.push(Sentence {
        text: text.to_string(),
        offset: buffer_start + leading,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<String> {
        segment(text).spans().map(str::to_string).collect()
    }

    fn basic() -> SentenceSegmenter {
        let config = Config::builder().rule_set(RuleSet::Basic).build().unwrap();
        SentenceSegmenter::from_config(&config)
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(segment("").is_empty());
        assert_eq!(segment("   \n\n  ").count(), 0);
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(
            spans("Is this counted correctly? Yes!"),
            vec!["Is this counted correctly?", "Yes!"]
        );
    }

    #[test]
    fn test_abbreviation_not_boundary() {
        assert_eq!(spans("Dr. Smith went home."), vec!["Dr. Smith went home."]);
        assert_eq!(
            spans("We met in the U.S. Army office."),
            vec!["We met in the U.S. Army office."]
        );
    }

    #[test]
    fn test_domain_not_boundary() {
        assert_eq!(
            spans("Visit openai.com for more."),
            vec!["Visit openai.com for more."]
        );
        assert_eq!(spans("Open notes.txt now."), vec!["Open notes.txt now."]);
    }

    #[test]
    fn test_decimal_not_boundary() {
        assert_eq!(spans("3.14 is pi."), vec!["3.14 is pi."]);
    }

    #[test]
    fn test_initials_not_boundary() {
        assert_eq!(
            spans("J. K. Rowling wrote it."),
            vec!["J. K. Rowling wrote it."]
        );
    }

    #[test]
    fn test_lowercase_continuation() {
        assert_eq!(
            spans("It costs approx. ten dollars."),
            vec!["It costs approx. ten dollars."]
        );
    }

    #[test]
    fn test_plain_boundaries() {
        assert_eq!(
            spans("The cat sat. The dog ran. Birds sang."),
            vec!["The cat sat.", "The dog ran.", "Birds sang."]
        );
    }

    #[test]
    fn test_ellipsis_folds_into_sentence() {
        assert_eq!(
            spans("Wait... What happened? Nothing...."),
            vec!["Wait... What happened?", "Nothing...."]
        );
    }

    #[test]
    fn test_closing_quotes_and_parentheses() {
        assert_eq!(
            spans("He said \"Stop.\" Then he left."),
            vec!["He said \"Stop.\"", "Then he left."]
        );
        assert_eq!(
            spans("(See above.) Next one."),
            vec!["(See above.)", "Next one."]
        );
        assert_eq!(spans("“Really?” she asked."), vec!["“Really?”", "she asked."]);
    }

    #[test]
    fn test_trailing_fragment() {
        assert_eq!(
            spans("Hello world. Trailing words"),
            vec!["Hello world.", "Trailing words"]
        );
        // Trailing punctuation without letters or digits is dropped
        assert_eq!(spans("Hello world. ..."), vec!["Hello world."]);
        assert_eq!(spans("Numbers 42"), vec!["Numbers 42"]);
    }

    #[test]
    fn test_terminator_runs_counted_separately() {
        assert_eq!(spans("Really?!"), vec!["Really?", "!"]);
        assert_eq!(segment("No!!").count(), 2);
    }

    #[test]
    fn test_terminator_runs_collapsed() {
        let config = Config::builder().collapse_terminators(true).build().unwrap();
        let segmenter = SentenceSegmenter::from_config(&config);

        let result = segmenter.segment("Really?! Yes!!! Fine.");
        let spans: Vec<&str> = result.spans().collect();
        assert_eq!(spans, vec!["Really?!", "Yes!!!", "Fine."]);
    }

    #[test]
    fn test_basic_rule_set_skips_initials_and_lowercase() {
        let segmenter = basic();
        assert_eq!(segmenter.rule_set(), RuleSet::Basic);

        let result = segmenter.segment("J. K. Rowling wrote it.");
        let spans: Vec<&str> = result.spans().collect();
        assert_eq!(spans, vec!["J.", "K.", "Rowling wrote it."]);

        assert_eq!(segmenter.segment("It costs approx. ten dollars.").count(), 2);
        // Shared guards still apply
        assert_eq!(segmenter.segment("Dr. Smith paid 3.50 at shop.com today.").count(), 1);
    }

    #[test]
    fn test_extra_abbreviations() {
        let config = Config::builder()
            .extra_abbreviations(["Approx"])
            .rule_set(RuleSet::Basic)
            .build()
            .unwrap();
        let segmenter = SentenceSegmenter::from_config(&config);
        assert_eq!(segmenter.segment("It costs approx. ten dollars.").count(), 1);
    }

    #[test]
    fn test_line_endings_normalized() {
        assert_eq!(spans("One.\r\nTwo.\rThree."), vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_offsets() {
        let result = segment("First one.  Second one.\nThird");
        let offsets: Vec<usize> = result.sentences().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }

    #[test]
    fn test_non_text_input() {
        assert_eq!(segment("\u{0}\u{1}###").count(), 0);
        assert_eq!(spans("!!!"), vec!["!", "!", "!"]);
    }

    #[test]
    fn test_decide_reports_guard() {
        let segmenter = SentenceSegmenter::new();
        let cases = [
            ("3.14", 1, BoundaryDecision::Reject(Guard::Decimal)),
            ("site.org", 4, BoundaryDecision::Reject(Guard::Domain)),
            ("Mr. X", 2, BoundaryDecision::Reject(Guard::Abbreviation)),
            ("by J. Doe", 4, BoundaryDecision::Reject(Guard::Initials)),
            ("end. more", 3, BoundaryDecision::Reject(Guard::LowercaseContinuation)),
            ("end. More", 3, BoundaryDecision::Accept),
            ("why?", 3, BoundaryDecision::Accept),
        ];

        for (text, pos, expected) in cases {
            let chars: Vec<char> = text.chars().collect();
            assert_eq!(segmenter.decide(&chars, pos), Some(expected), "{text:?}");
        }
    }

    #[test]
    fn test_decide_ignores_non_terminators() {
        let segmenter = SentenceSegmenter::new();
        let chars: Vec<char> = "Hi.".chars().collect();

        assert_eq!(segmenter.decide(&chars, 0), None);
        assert_eq!(segmenter.decide(&chars, 3), None);
        assert_eq!(segmenter.decide(&[], 0), None);
        assert_eq!(segmenter.decide(&chars, 2), Some(BoundaryDecision::Accept));
    }

    #[test]
    fn test_guard_priority() {
        // "a.m" matches both domain and abbreviation; domain fires first
        let segmenter = SentenceSegmenter::new();
        let chars: Vec<char> = "at 9 a.m. sharp".chars().collect();
        assert_eq!(
            segmenter.decide(&chars, 6),
            Some(BoundaryDecision::Reject(Guard::Domain))
        );
        assert_eq!(
            segmenter.decide(&chars, 8),
            Some(BoundaryDecision::Reject(Guard::Abbreviation))
        );
    }
}
