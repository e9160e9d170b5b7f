#![forbid(unsafe_code)]

//! The frame compositor.
//!
//! Walks a widget list inside a coordinate origin and a visible clip box,
//! applies frame-level scrolling, dispatches widgets to their renderers,
//! and recurses into nested frames with a narrowed clip box.

use celld_core::Tick;
use celld_core::display::DisplayProperties;
use celld_core::geometry::{ClipBox, Loc};
use celld_core::widget::{ScrollDirection, Widget};
use tracing::trace;

use crate::motion::scroll_offset;
use crate::sink::DisplaySink;
use crate::widget::{bar, num, scroller, string, title};

/// Composite `widgets` into `origin`, clipped to `vis`.
///
/// `direction`/`speed` are the frame's own scroll parameters; content that
/// fits the visible box is never offset. `nested` is true below the
/// top-level widget list: bars, scrollers, icons and numbers do not yet
/// render inside nested frames and pass through silently there.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_frame<S: DisplaySink>(
    sink: &mut S,
    props: DisplayProperties,
    title_speed: i32,
    widgets: &[Widget],
    mut origin: Loc,
    vis: ClipBox,
    direction: ScrollDirection,
    speed: i32,
    tick: Tick,
    nested: bool,
) {
    if widgets.is_empty() || origin.height <= 0 || origin.width <= 0 {
        return;
    }

    // Scroll pre-pass: shift the origin when the content overhangs the
    // visible box. `fy` is kept so horizontal bars can skip rows that the
    // shift moved out of view.
    let mut fy = 0;
    match direction {
        ScrollDirection::Vertical => {
            if origin.height > vis.bottom - vis.top {
                let space = origin.height - (vis.bottom - vis.top) + 1;
                fy = scroll_offset(speed, tick, true, space);
                origin.y -= fy;
            }
        }
        ScrollDirection::Horizontal => {
            if origin.width > vis.right - vis.left {
                let space = origin.width - (vis.right - vis.left) + 1;
                origin.x -= scroll_offset(speed, tick, true, space);
            }
        }
        ScrollDirection::Marquee => {}
    }

    for widget in widgets {
        match widget {
            Widget::Str(w) => string::render_string(sink, w, origin, vis),
            Widget::Title(w) => title::render_title(sink, w, origin, vis, title_speed, tick),
            Widget::Frame(w) => {
                let child = ClipBox::new(
                    origin.x + w.left - 1,
                    origin.y + w.top - 1,
                    origin.x + w.right,
                    origin.y + w.bottom,
                );
                match vis.intersection_opt(child) {
                    Some(visible) => render_frame(
                        sink,
                        props,
                        title_speed,
                        &w.screen.widgets,
                        Loc::new(origin.x + w.left - 1, origin.y + w.top - 1, w.width, w.height),
                        visible,
                        w.direction,
                        w.speed,
                        tick,
                        true,
                    ),
                    None => trace!(
                        left = w.left,
                        top = w.top,
                        right = w.right,
                        bottom = w.bottom,
                        "frame outside visible area, dropped"
                    ),
                }
            }
            // Bars, scrollers, icons and numbers render in the top-level
            // path only; inside nested frames they are unsupported
            // pass-throughs.
            Widget::HBar(w) if !nested => bar::render_hbar(sink, props, w, origin, vis, fy),
            Widget::VBar(w) if !nested => bar::render_vbar(sink, props, w, origin),
            Widget::PBar(w) if !nested => bar::render_pbar(sink, w, origin),
            Widget::Icon(w) if !nested => sink.draw_icon(w.x, w.y, w.icon),
            Widget::Scroller(w) if !nested => scroller::render_scroller(sink, w, tick),
            Widget::Num(w) if !nested => num::render_num(sink, w, origin),
            Widget::None => {}
            _ => {}
        }
    }
}
