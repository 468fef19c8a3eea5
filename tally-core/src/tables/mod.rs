//! Static lookup tables used by the segmenter
//!
//! All tables are read-only after construction and safe to share across threads.

pub mod abbreviation;
pub mod terminator;

pub use abbreviation::{AbbrevTable, BUILTIN_ABBREVIATIONS, LOOKBACK_CHARS};
pub use terminator::{ellipsis_len, is_closing, is_terminator};
