//! Line ending normalization

use std::borrow::Cow;

/// Replace `\r\n` and lone `\r` with `\n`
///
/// Borrows the input when it contains no carriage return.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
