#![forbid(unsafe_code)]

//! String widget rendering.

use celld_core::geometry::{ClipBox, Loc};
use celld_core::widget::StringWidget;

use crate::sink::DisplaySink;
use crate::text;

/// Draw a string widget, clipped against the left edge of the visible box.
///
/// The widget is drawn only when its absolute row lies strictly inside
/// `(vis.top, vis.bottom]`. Horizontally, the suffix that starts at the
/// first visible cell is drawn at the correspondingly advanced column; no
/// right-edge truncation is performed, the sink clips.
pub(crate) fn render_string<S: DisplaySink>(sink: &mut S, w: &StringWidget, origin: Loc, vis: ClipBox) {
    let Some(txt) = w.text.as_deref() else {
        return;
    };
    let row = origin.y + w.y;
    if row <= vis.top || row > vis.bottom {
        return;
    }

    let length = text::cell_len(txt) as i32;
    // First visible cell of the text; below zero the widget is indented
    // from the frame edge, above the length nothing is visible.
    let offset = (vis.left - (origin.x + w.x) + 1).clamp(0, length);

    sink.draw_string(
        origin.x + w.x + offset,
        row,
        text::cells_from(txt, offset as usize),
    );
}
