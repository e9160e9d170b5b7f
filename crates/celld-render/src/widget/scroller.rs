#![forbid(unsafe_code)]

//! Scroller widget rendering.
//!
//! A scroller animates text inside a box, in one of three modes selected by
//! its direction code: marquee (continuous circular motion), horizontal
//! bounce, or vertical row-wrapped bounce. Text that fits its box is drawn
//! once, without consulting the motion engine.

use celld_core::Tick;
use celld_core::widget::{ScrollDirection, ScrollerWidget};

use crate::motion::scroll_offset;
use crate::sink::DisplaySink;
use crate::text;

pub(crate) fn render_scroller<S: DisplaySink>(sink: &mut S, w: &ScrollerWidget, tick: Tick) {
    let Some(txt) = w.text.as_deref() else {
        return;
    };
    if w.right < w.left {
        return;
    }
    let span = (w.right - w.left + 1) as usize;

    match w.direction {
        ScrollDirection::Marquee => marquee(sink, w, txt, span, tick),
        ScrollDirection::Horizontal => horizontal(sink, w, txt, span, tick),
        ScrollDirection::Vertical => vertical(sink, w, txt, span, tick),
    }
}

/// Continuous circular scrolling: the text chases its own tail across the
/// window, separated by a gap of half the window width.
fn marquee<S: DisplaySink>(sink: &mut S, w: &ScrollerWidget, txt: &str, span: usize, tick: Tick) {
    let len = text::cell_len(txt);
    if len <= span {
        sink.draw_string(w.left, w.top, txt);
        return;
    }

    let gap = span / 2;
    let total = len + gap;
    let offset = scroll_offset(w.speed, tick, false, total as i32) as usize;

    let mut window = String::with_capacity(span * 4);
    if gap > offset {
        // The text is entering from the right; pad what the gap still covers.
        for _ in 0..gap - offset {
            window.push(' ');
        }
        window.push_str(text::cell_window(txt, 0, span - (gap - offset)));
    } else {
        // Tail of the text, then the gap, then the wrapped-around head.
        window.push_str(text::cell_window(txt, offset - gap, span));
        let mut room = span as i64 - (total - offset) as i64;
        if room > 0 {
            for _ in 0..(room as usize).min(gap) {
                window.push(' ');
            }
            room -= gap as i64;
            if room > 0 {
                window.push_str(text::cell_window(txt, 0, room as usize));
            }
        }
    }

    sink.draw_string(w.left, w.top, &window);
}

/// Horizontal bounce scrolling over the overhang.
fn horizontal<S: DisplaySink>(sink: &mut S, w: &ScrollerWidget, txt: &str, span: usize, tick: Tick) {
    let len = text::cell_len(txt) + 1;
    if len <= span {
        sink.draw_string(w.left, w.top, txt);
        return;
    }

    let offset = scroll_offset(w.speed, tick, true, (len - span) as i32) as usize;
    sink.draw_string(w.left, w.top, text::cell_window(txt, offset, span));
}

/// Vertical mode: wrap the text into rows of the window width; bounce the
/// first visible row across the overhang when the box has too few rows.
fn vertical<S: DisplaySink>(sink: &mut S, w: &ScrollerWidget, txt: &str, span: usize, tick: Tick) {
    let len = text::cell_len(txt);
    if len <= span {
        sink.draw_string(w.left, w.top, txt);
        return;
    }

    let rows_needed = len.div_ceil(span) as i32;
    let rows_available = w.bottom - w.top + 1;

    if rows_needed <= rows_available {
        for i in 0..rows_needed {
            sink.draw_string(
                w.left,
                w.top + i,
                text::cell_window(txt, i as usize * span, span),
            );
        }
    } else {
        let space = rows_needed - rows_available + 1;
        let begin = scroll_offset(w.speed, tick, true, space);
        for i in begin..begin + rows_available {
            sink.draw_string(
                w.left,
                w.top + (i - begin),
                text::cell_window(txt, i as usize * span, span),
            );
        }
    }
}
