#![forbid(unsafe_code)]

//! Bounded text windowing, measured in display cells.
//!
//! One grapheme cluster occupies one cell — character LCDs have no
//! double-width glyphs. All windowing saturates at the ends of the text, so
//! callers can pass offsets derived from scroll arithmetic without
//! re-checking bounds.

use unicode_segmentation::UnicodeSegmentation;

/// Number of display cells `text` occupies.
pub(crate) fn cell_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte index of the `cell`-th grapheme boundary, saturating at the end.
fn byte_at(text: &str, cell: usize) -> usize {
    text.grapheme_indices(true)
        .nth(cell)
        .map_or(text.len(), |(idx, _)| idx)
}

/// The suffix of `text` starting at cell `start`.
pub(crate) fn cells_from(text: &str, start: usize) -> &str {
    &text[byte_at(text, start)..]
}

/// A window of at most `len` cells starting at cell `start`.
pub(crate) fn cell_window(text: &str, start: usize, len: usize) -> &str {
    let begin = byte_at(text, start);
    let end = byte_at(text, start.saturating_add(len));
    &text[begin..end]
}
