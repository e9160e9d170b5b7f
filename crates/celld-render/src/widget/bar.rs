#![forbid(unsafe_code)]

//! Bar widget rendering: horizontal, vertical, and progress bars.
//!
//! Bar lengths arrive in cell dots. They are converted to a whole-cell
//! count (rounded up) plus a fill ratio in parts per thousand recomputed
//! against the rounded width, so the displayed fill stays proportionally
//! accurate. Bars with negative lengths would extend left/down; the sink
//! vocabulary cannot express that, so they are skipped.

use celld_core::display::DisplayProperties;
use celld_core::geometry::{ClipBox, Loc};
use celld_core::widget::{BarWidget, ProgressBarWidget};

use crate::sink::{BarPattern, DisplaySink};

/// Draw a horizontal bar.
///
/// `fy` is the vertical scroll offset already applied to the surrounding
/// frame; rows scrolled off above it are skipped.
pub(crate) fn render_hbar<S: DisplaySink>(
    sink: &mut S,
    props: DisplayProperties,
    w: &BarWidget,
    origin: Loc,
    vis: ClipBox,
    fy: i32,
) {
    if props.cell_width <= 0 {
        return;
    }
    if !(w.x > 0 && w.y > 0 && w.y > fy && w.y <= vis.bottom - vis.top) {
        return;
    }
    if w.length <= 0 {
        // Zero-length draws nothing; negative would extend leftwards.
        return;
    }

    let mut len = props.width - w.x - origin.x + 1;
    let mut promille: i32 = 1000;
    if w.length / props.cell_width < vis.right - origin.x - w.x + 1 {
        len = w.length / props.cell_width + i32::from(w.length % props.cell_width != 0);
        promille =
            (1000 * i64::from(w.length) / (i64::from(props.cell_width) * i64::from(len))) as i32;
    }

    sink.draw_hbar(w.x + origin.x, w.y + origin.y, len, promille, BarPattern::Filled);
}

/// Draw a vertical bar spanning the full display height.
pub(crate) fn render_vbar<S: DisplaySink>(
    sink: &mut S,
    props: DisplayProperties,
    w: &BarWidget,
    origin: Loc,
) {
    if props.cell_height <= 0 || props.height <= 0 {
        return;
    }
    if !(w.x > 0 && w.y > 0) {
        return;
    }
    if w.length <= 0 {
        // Negative would extend downwards.
        return;
    }

    let full_len = props.height;
    let promille =
        (1000 * i64::from(w.length) / (i64::from(props.cell_height) * i64::from(full_len))) as i32;

    sink.draw_vbar(w.x + origin.x, w.y + origin.y, full_len, promille, BarPattern::Filled);
}

/// Draw a progress bar at the caller-supplied width.
pub(crate) fn render_pbar<S: DisplaySink>(sink: &mut S, w: &ProgressBarWidget, origin: Loc) {
    if !(w.x > 0 && w.y > 0 && w.width > 0) {
        return;
    }

    sink.draw_pbar(
        w.x + origin.x,
        w.y + origin.y,
        w.width,
        w.promille,
        w.begin_label.as_deref(),
        w.end_label.as_deref(),
    );
}
