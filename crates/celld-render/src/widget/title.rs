#![forbid(unsafe_code)]

//! Title widget rendering.
//!
//! A title is text between filled-block "caps": two cap cells, a space, the
//! text, and cap cells out to the right edge of the visible box. Three
//! leading and three trailing cells are reserved, so the text area is the
//! frame width minus 6. A title that does not fit ticks back and forth via
//! the motion engine unless the titlespeed setting disables it.

use celld_core::Tick;
use celld_core::geometry::{ClipBox, Loc};
use celld_core::widget::{IconKind, TitleWidget};

use crate::motion::scroll_offset;
use crate::renderer::{TITLESPEED_MAX, TITLESPEED_MIN, TITLESPEED_NO};
use crate::sink::DisplaySink;
use crate::text;

pub(crate) fn render_title<S: DisplaySink>(
    sink: &mut S,
    w: &TitleWidget,
    origin: Loc,
    vis: ClipBox,
    title_speed: i32,
    tick: Tick,
) {
    let Some(txt) = w.text.as_deref() else {
        return;
    };
    // A title needs room for caps plus at least a sliver of text.
    if origin.width < 8 || origin.y + w.y < vis.top {
        return;
    }

    let row = origin.y + w.y;
    let length = text::cell_len(txt) as i32;
    let width = origin.width - 6;

    // Map the titlespeed setting to a tick rate: <= 0 disables the ticker,
    // larger settings tick faster (lower rate value).
    let delay = if title_speed <= TITLESPEED_NO {
        TITLESPEED_NO
    } else {
        (TITLESPEED_MAX - title_speed).max(TITLESPEED_MIN)
    };

    // Leading caps.
    if origin.x + w.x > vis.left {
        sink.draw_icon(origin.x + w.x, row, IconKind::BlockFilled);
    }
    if origin.x + w.x + 1 > vis.left {
        sink.draw_icon(origin.x + w.x + 1, row, IconKind::BlockFilled);
    }

    let (shown, clip, trail_from) = if length <= width || delay == TITLESPEED_NO {
        // Static: clip against the left edge like a plain string.
        let clip = (vis.left - (origin.x + w.x + 3) + 1).clamp(0, length);
        let fit = length.min(width);
        (
            text::cell_window(txt, clip as usize, fit as usize),
            clip,
            origin.x + w.x + fit + 4,
        )
    } else {
        // Tick the title across the overhang.
        let offset = scroll_offset(delay, tick, true, length - width);
        (
            text::cell_window(txt, offset as usize, width as usize),
            0,
            origin.x + w.x + width + 4,
        )
    };

    sink.draw_string(origin.x + w.x + 3 + clip, row, shown);

    // Trailing caps out to the visible right edge.
    for x in trail_from..=vis.right {
        sink.draw_icon(x, row, IconKind::BlockFilled);
    }
}
