//! Differential flush and full-frame paint benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use shellcfg_tui::app::{DefaultPainter, Painter, TuiState, View};
use shellcfg_tui::bridge::MemoryBridge;
use shellcfg_tui::{App, Cell, CellGrid, Color, Screen, Style};
use std::hint::black_box;

fn screen_with(width: u16, height: u16, fill: impl Fn(&mut Screen)) -> Screen {
    let mut screen = Screen::new(width, height);
    fill(&mut screen);
    screen
}

fn flush_unchanged(c: &mut Criterion) {
    let mut screen = Screen::new(80, 24);
    let mut out = Vec::with_capacity(16 * 1024);
    screen.flush(&mut out, false).unwrap();

    c.bench_function("flush_unchanged_80x24", |b| {
        b.iter(|| {
            out.clear();
            screen.flush(black_box(&mut out), false).unwrap()
        });
    });
}

fn flush_single_change(c: &mut Criterion) {
    let style = Style::fg(Color::Red);
    c.bench_function("flush_single_change_80x24", |b| {
        b.iter_batched(
            || screen_with(80, 24, |s| s.set_cell(40, 12, Cell::new('X', style))),
            |mut screen| {
                let mut out = Vec::new();
                screen.flush(black_box(&mut out), false).unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn flush_full_row(c: &mut Criterion) {
    let style = Style::fg(Color::Green).with_bold();
    c.bench_function("flush_full_row_80x24", |b| {
        b.iter_batched(
            || {
                screen_with(80, 24, |s| {
                    s.buffer_mut().draw_text(0, 12, &"=".repeat(80), style);
                })
            },
            |mut screen| {
                let mut out = Vec::new();
                screen.flush(black_box(&mut out), false).unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn flush_scattered(c: &mut Criterion) {
    let styles = [
        Style::fg(Color::Blue),
        Style::fg(Color::Yellow).with_bg(Color::Black),
        Style::dim(),
    ];
    c.bench_function("flush_scattered_80x24", |b| {
        b.iter_batched(
            || {
                screen_with(80, 24, |s| {
                    for y in 0..24 {
                        for x in (0..80).step_by(3) {
                            let style = styles[usize::from(x + y) % styles.len()];
                            s.set_cell(x, y, Cell::new('*', style));
                        }
                    }
                })
            },
            |mut screen| {
                let mut out = Vec::new();
                screen.flush(black_box(&mut out), false).unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn flush_forced(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush_forced");
    for (width, height) in [(80u16, 24u16), (200, 50)] {
        let mut screen = Screen::new(width, height);
        let mut out = Vec::with_capacity(64 * 1024);
        group.bench_function(format!("{width}x{height}"), |b| {
            b.iter(|| {
                out.clear();
                screen.flush(black_box(&mut out), true).unwrap()
            });
        });
    }
    group.finish();
}

fn paint_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint");
    let mut bridge = MemoryBridge::with_sample_data();
    let mut painter = DefaultPainter::default();

    for view in [View::MainMenu, View::PathView, View::AliasView] {
        let mut state = TuiState::new();
        if view != View::MainMenu {
            state.goto_view(view);
            let items = view.load(&mut bridge);
            state.store_items(view, items);
        }
        state.set_visible_height(painter.list_height(24));
        let mut grid = CellGrid::new(80, 24);

        group.bench_function(format!("{view:?}"), |b| {
            b.iter(|| {
                grid.clear();
                painter.paint(black_box(&state), &mut grid);
            });
        });
    }
    group.finish();
}

/// Selection moving down and back: paint plus diff per keystroke.
fn app_keystroke_frames(c: &mut Criterion) {
    let mut app = App::with_default_painter(MemoryBridge::with_sample_data(), 80, 24);
    let mut out = Vec::with_capacity(16 * 1024);
    app.step(None, &mut out).unwrap();

    c.bench_function("app_down_up_frames", |b| {
        b.iter(|| {
            out.clear();
            app.step(Some(b"\x1b[B"), &mut out).unwrap();
            app.step(Some(b"\x1b[A"), &mut out).unwrap();
            app.step(None, black_box(&mut out)).unwrap()
        });
    });
}

criterion_group!(
    benches,
    flush_unchanged,
    flush_single_change,
    flush_full_row,
    flush_scattered,
    flush_forced,
    paint_views,
    app_keystroke_frames
);
criterion_main!(benches);
