//! Benchmarks for the motion engine and a full screen render.

use celld_core::display::DisplayProperties;
use celld_core::screen::Screen;
use celld_core::widget::{BarWidget, ScrollDirection, ScrollerWidget, StringWidget, TitleWidget, Widget};
use celld_harness::GridSink;
use celld_render::Renderer;
use celld_render::motion::scroll_offset;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn busy_screen() -> Screen {
    Screen::new("bench", 20, 4)
        .with_widget(Widget::Title(TitleWidget::new(1, 1, "A title that is long enough to tick")))
        .with_widget(Widget::Str(StringWidget::new(1, 2, "some status text")))
        .with_widget(Widget::HBar(BarWidget::new(1, 3, 42)))
        .with_widget(Widget::Scroller(ScrollerWidget {
            left: 1,
            top: 4,
            right: 20,
            bottom: 4,
            direction: ScrollDirection::Marquee,
            speed: 1,
            text: Some("a marquee message longer than the display".into()),
        }))
}

fn bench_scroll_offset(c: &mut Criterion) {
    c.bench_function("scroll_offset_bounce", |b| {
        let mut tick = 0u64;
        b.iter(|| {
            tick += 1;
            black_box(scroll_offset(black_box(2), tick, true, black_box(30)))
        })
    });
}

fn bench_render_screen(c: &mut Criterion) {
    let screen = busy_screen();
    c.bench_function("render_screen_20x4", |b| {
        let mut renderer = Renderer::new(DisplayProperties::new(20, 4, 5, 8));
        let mut sink = GridSink::new(20, 4);
        let mut tick = 0u64;
        b.iter(|| {
            tick += 1;
            renderer
                .render_screen(&mut sink, Some(black_box(&screen)), tick)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_scroll_offset, bench_render_screen);
criterion_main!(benches);
