//! Full-pipeline tests: one renderer, one screen, a recording or grid sink,
//! and assertions on what a sequence of render ticks produces.

use celld_core::display::DisplayProperties;
use celld_core::screen::{ClientOverrides, Screen};
use celld_core::state::{BacklightState, CursorMode, HeartbeatState};
use celld_core::widget::{
    BarWidget, FrameWidget, ScrollDirection, ScrollerWidget, StringWidget, TitleWidget, Widget,
};
use celld_harness::{GridSink, RecordingSink, SinkCall};
use celld_render::{RenderError, Renderer};

const PROPS: DisplayProperties = DisplayProperties::new(20, 4, 5, 8);

fn renderer() -> Renderer {
    Renderer::new(PROPS)
}

fn plain_screen() -> Screen {
    Screen::new("test", 20, 4).with_widget(Widget::Str(StringWidget::new(1, 1, "hello")))
}

#[test]
fn null_screen_fails_and_touches_nothing() {
    let mut r = renderer();
    let mut sink = RecordingSink::new();
    assert_eq!(
        r.render_screen(&mut sink, None, 0),
        Err(RenderError::NullScreen)
    );
    assert!(sink.calls.is_empty());
}

#[test]
fn render_sequence_is_clear_first_flush_last() {
    let mut r = renderer();
    let mut sink = RecordingSink::new();
    let screen = plain_screen();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();

    assert_eq!(sink.calls.first(), Some(&SinkCall::Clear));
    assert_eq!(sink.calls.last(), Some(&SinkCall::Flush));

    // The fixed pipeline steps appear exactly once, in order.
    let positions: Vec<usize> = [
        sink.calls.iter().position(|c| matches!(c, SinkCall::Clear)),
        sink.calls
            .iter()
            .position(|c| matches!(c, SinkCall::Backlight(_))),
        sink.calls
            .iter()
            .position(|c| matches!(c, SinkCall::Outputs(_))),
        sink.calls
            .iter()
            .position(|c| matches!(c, SinkCall::String { .. })),
        sink.calls
            .iter()
            .position(|c| matches!(c, SinkCall::Cursor { .. })),
        sink.calls
            .iter()
            .position(|c| matches!(c, SinkCall::Heartbeat(_))),
        sink.calls.iter().position(|c| matches!(c, SinkCall::Flush)),
    ]
    .into_iter()
    .map(Option::unwrap)
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn cursor_and_outputs_pass_through() {
    let mut r = renderer();
    r.state.output_state = 0b1010;
    let mut screen = plain_screen();
    screen.cursor = CursorMode::Block;
    screen.cursor_x = 7;
    screen.cursor_y = 2;

    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert!(sink.calls.contains(&SinkCall::Outputs(0b1010)));
    assert!(sink.calls.contains(&SinkCall::Cursor {
        x: 7,
        y: 2,
        mode: CursorMode::Block
    }));
}

#[test]
fn backlight_chain_resolves_through_the_pipeline() {
    // Process override beats client and screen.
    let mut r = renderer();
    r.state.backlight = BacklightState::OFF;
    let mut screen = plain_screen();
    screen.client = Some(ClientOverrides {
        backlight: BacklightState::ON,
        heartbeat: HeartbeatState::OPEN,
    });
    screen.backlight = BacklightState::ON;

    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert_eq!(sink.last_backlight(), Some(BacklightState::OFF));

    // All unset: the fallback (on) applies.
    let mut r = renderer();
    let screen = plain_screen();
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert_eq!(sink.last_backlight(), Some(BacklightState::ON));
    assert_eq!(sink.last_heartbeat(), Some(HeartbeatState::ON));
}

#[test]
fn flashing_backlight_toggles_across_ticks() {
    let mut r = renderer();
    r.state.backlight = BacklightState::ON | BacklightState::FLASH;
    let screen = plain_screen();

    let mut lit = Vec::new();
    for tick in 0..16 {
        let mut sink = RecordingSink::new();
        r.render_screen(&mut sink, Some(&screen), tick).unwrap();
        lit.push(sink.last_backlight() == Some(BacklightState::ON));
    }
    // Dark exactly on ticks 7 and 15.
    let dark: Vec<usize> = lit
        .iter()
        .enumerate()
        .filter_map(|(i, on)| (!on).then_some(i))
        .collect();
    assert_eq!(dark, vec![7, 15]);
}

#[test]
fn server_message_lifecycle() {
    let mut r = renderer();
    let screen = plain_screen();
    r.server_msg("hi", 5).unwrap();

    // Visible for exactly five renders, right-aligned on the bottom row.
    for tick in 0..5u64 {
        let mut sink = RecordingSink::new();
        r.render_screen(&mut sink, Some(&screen), tick).unwrap();
        let msgs = sink.strings();
        assert!(
            msgs.contains(&(17, 4, "| hi")),
            "tick {tick}: {msgs:?}"
        );
    }
    assert!(r.message().is_none());

    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 5).unwrap();
    assert!(!sink.drew_text("| hi"));
}

#[test]
fn rejected_message_leaves_active_one_intact() {
    let mut r = renderer();
    r.server_msg("keep me", 3).unwrap();

    assert_eq!(
        r.server_msg("this text is way too long", 3),
        Err(RenderError::InvalidMessage)
    );
    assert_eq!(r.server_msg("hi", 0), Err(RenderError::InvalidMessage));
    assert_eq!(r.server_msg("hi", -2), Err(RenderError::InvalidMessage));

    let screen = plain_screen();
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert!(sink.drew_text("| keep me"));
}

#[test]
fn posting_replaces_the_active_message() {
    let mut r = renderer();
    r.server_msg("first", 10).unwrap();
    r.server_msg("second", 2).unwrap();

    let screen = plain_screen();
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert!(sink.drew_text("| second"));
    assert!(!sink.drew_text("| first"));
}

#[test]
fn fifteen_cell_message_is_the_limit() {
    let mut r = renderer();
    assert!(r.server_msg("123456789012345", 1).is_ok());
    assert_eq!(
        r.server_msg("1234567890123456", 1),
        Err(RenderError::InvalidMessage)
    );
}

#[test]
fn fitting_frame_never_scrolls() {
    // Content height equals the display height: the string must sit on the
    // same row at every tick.
    let mut r = renderer();
    let screen = Screen::new("fits", 20, 4).with_widget(Widget::Str(StringWidget::new(2, 3, "pinned")));
    for tick in [0u64, 1, 10, 100, 1000, 9999] {
        let mut sink = RecordingSink::new();
        r.render_screen(&mut sink, Some(&screen), tick).unwrap();
        assert_eq!(sink.strings(), vec![(2, 3, "pinned")], "tick {tick}");
    }
}

#[test]
fn oversized_screen_scrolls_rows_through_the_band() {
    let mut r = renderer();
    let mut screen = Screen::new("tall", 20, 8);
    screen.duration = 16; // speed = max(16 / 8, 1) = 2
    screen.widgets = vec![
        Widget::Str(StringWidget::new(1, 1, "top")),
        Widget::Str(StringWidget::new(1, 8, "bottom")),
    ];

    // At tick 0 the dwell keeps the top rows visible.
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert_eq!(sink.strings(), vec![(1, 1, "top")]);

    // Far enough into the traversal the bottom row has scrolled into view:
    // space = 5, speed = 2 -> offset 4 at tick 28.
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 28).unwrap();
    assert_eq!(sink.strings(), vec![(1, 4, "bottom")]);
}

#[test]
fn nested_frame_renders_into_its_region() {
    let mut sub = Screen::new("sub", 8, 2);
    sub.widgets = vec![Widget::Str(StringWidget::new(1, 1, "inner"))];
    let frame = Widget::Frame(FrameWidget {
        left: 5,
        top: 2,
        right: 12,
        bottom: 3,
        width: 8,
        height: 2,
        direction: ScrollDirection::Vertical,
        speed: 1,
        screen: Box::new(sub),
    });
    let screen = Screen::new("outer", 20, 4)
        .with_widget(Widget::Str(StringWidget::new(1, 1, "outer")))
        .with_widget(frame);

    let mut r = renderer();
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    assert_eq!(sink.strings(), vec![(1, 1, "outer"), (5, 2, "inner")]);
}

#[test]
fn grid_snapshot_of_a_status_screen() {
    let mut r = renderer();
    let screen = Screen::new("status", 20, 4)
        .with_widget(Widget::Title(TitleWidget::new(1, 1, "CPU")))
        .with_widget(Widget::Str(StringWidget::new(1, 2, "load: 0.42")))
        .with_widget(Widget::HBar(BarWidget::new(1, 3, 50)));

    let mut grid = GridSink::new(20, 4);
    r.render_screen(&mut grid, Some(&screen), 0).unwrap();

    assert_eq!(grid.row(1), "██ CPU █████████████");
    assert_eq!(grid.row(2), "load: 0.42          ");
    assert_eq!(grid.row(3), "██████████          ");
    assert_eq!(grid.flushes, 1);
    assert_eq!(grid.backlight, Some(BacklightState::ON));
}

#[test]
fn marquee_scroller_fitting_text_is_stable() {
    let mut r = renderer();
    let screen = Screen::new("m", 20, 4).with_widget(Widget::Scroller(ScrollerWidget {
        left: 1,
        top: 1,
        right: 20,
        bottom: 1,
        direction: ScrollDirection::Marquee,
        speed: 1,
        text: Some("short".into()),
    }));
    for tick in [0u64, 9, 250, 4096] {
        let mut sink = RecordingSink::new();
        r.render_screen(&mut sink, Some(&screen), tick).unwrap();
        assert_eq!(sink.strings(), vec![(1, 1, "short")], "tick {tick}");
    }
}

#[test]
fn empty_screen_still_runs_the_fixed_steps() {
    let mut r = renderer();
    let screen = Screen::new("empty", 20, 4);
    let mut sink = RecordingSink::new();
    r.render_screen(&mut sink, Some(&screen), 0).unwrap();
    // Clear, backlight, outputs, cursor, heartbeat, flush; no draws.
    assert_eq!(sink.calls.len(), 6);
    assert!(sink.strings().is_empty());
}
