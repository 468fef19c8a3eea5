//! Terminator, closing-delimiter and ellipsis detection

/// Minimum number of consecutive dots read as an ellipsis
pub const ELLIPSIS_MIN_DOTS: usize = 3;

/// Check if character is a sentence terminator candidate
#[inline]
pub fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Check if character closes a quotation or parenthetical
///
/// Closers directly after an accepted terminator belong to that sentence.
#[inline]
pub fn is_closing(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}' | '\u{00BB}'
    )
}

/// Length of the ellipsis starting at `pos`, or 0 if there is none
///
/// Any run of at least [`ELLIPSIS_MIN_DOTS`] dots counts, so "...." is one
/// ellipsis rather than an ellipsis followed by a full stop.
pub fn ellipsis_len(chars: &[char], pos: usize) -> usize {
    let run = chars
        .get(pos..)
        .map(|rest| rest.iter().take_while(|&&c| c == '.').count())
        .unwrap_or(0);

    if run >= ELLIPSIS_MIN_DOTS {
        run
    } else {
        0
    }
}
