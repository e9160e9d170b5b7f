#![forbid(unsafe_code)]

//! Big-digit widget rendering.

use celld_core::geometry::Loc;
use celld_core::widget::NumWidget;

use crate::sink::DisplaySink;

/// Draw a big-digit glyph. Values 0-9 are digits, 10 is the colon;
/// anything else (or a non-positive column) is skipped.
pub(crate) fn render_num<S: DisplaySink>(sink: &mut S, w: &NumWidget, origin: Loc) {
    if w.x > 0 && (0..=10).contains(&w.value) {
        sink.draw_number(w.x + origin.x, w.value);
    }
}
