//! Abbreviation lookup with bounded backward scanning
//!
//! Entries are stored lowercased and without their final dot, because the dot
//! that triggers the lookup is the one being classified.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::normalize_abbreviation;

/// Built-in English abbreviations
pub const BUILTIN_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "ave", "rd", "col", "gen", "lt", "hon",
    "etc", "e.g", "i.e", "vs", "a.m", "p.m", "u.s", "u.k", "u.n", "c.i.a", "f.b.i", "jan", "feb",
    "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "dept", "fig",
];

/// Maximum number of characters inspected before a dot
pub const LOOKBACK_CHARS: usize = 20;

static BUILTIN: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BUILTIN_ABBREVIATIONS.iter().copied().collect());

/// Case-insensitive abbreviation table
///
/// The built-in set is shared; only user-supplied extras are owned.
#[derive(Debug, Clone, Default)]
pub struct AbbrevTable {
    extra: HashSet<String>,
}

impl AbbrevTable {
    /// Table holding only the built-in abbreviations
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in table extended with additional entries
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = extra
            .into_iter()
            .map(|abbr| normalize_abbreviation(abbr.as_ref()))
            .filter(|abbr| !abbr.is_empty())
            .collect();
        Self { extra }
    }

    /// Exact membership test for an already normalized token
    pub fn contains(&self, token: &str) -> bool {
        BUILTIN.contains(token) || self.extra.contains(token)
    }

    /// Number of entries, built-in included
    pub fn len(&self) -> usize {
        BUILTIN.len()
            + self
                .extra
                .iter()
                .filter(|abbr| !BUILTIN.contains(abbr.as_str()))
                .count()
    }

    /// Always false: the built-in set is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether the token ending right before `chars[dot]` is an abbreviation
    ///
    /// The token is the run of letters and embedded dots preceding the dot,
    /// limited to [`LOOKBACK_CHARS`] characters.
    pub fn ends_abbreviation(&self, chars: &[char], dot: usize) -> bool {
        let floor = dot.saturating_sub(LOOKBACK_CHARS);
        let mut start = dot.min(chars.len());
        while start > floor {
            let ch = chars[start - 1];
            if ch.is_alphabetic() || ch == '.' {
                start -= 1;
            } else {
                break;
            }
        }

        if start == dot {
            return false;
        }

        let token: String = chars[start..dot].iter().collect();
        let normalized = normalize_abbreviation(&token);
        !normalized.is_empty() && self.contains(&normalized)
    }
}
