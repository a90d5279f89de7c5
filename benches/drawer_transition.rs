//! Benchmarks for the drawer slide and click hit-testing.
//!
//! Both run once per frame or click, so they must stay cheap.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use health_tui::state::drawer::{hit_test, panel_area};
use health_tui::state::{Drawer, State};
use ratatui::layout::Rect;
use std::time::Duration;

fn bench_drawer_slide(c: &mut Criterion) {
    c.bench_function("drawer_slide_60_frames", |b| {
        b.iter(|| {
            let mut drawer = Drawer::new(Duration::from_millis(300));
            drawer.set_open(true);
            for _ in 0..60 {
                drawer.advance(black_box(Duration::from_millis(16)));
            }
            drawer.offset()
        })
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let area = Rect::new(0, 0, 120, 40);
    c.bench_function("hit_test_full_grid", |b| {
        b.iter(|| {
            let panel = panel_area(area, black_box(-0.25));
            let mut hits = 0;
            for row in 0..area.height {
                for column in 0..area.width {
                    if hit_test(panel, column, row) != health_tui::state::DrawerHit::Outside {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

fn bench_open_close_navigate(c: &mut Criterion) {
    c.bench_function("open_close_navigate", |b| {
        b.iter(|| {
            let mut state = State::default();
            state.set_terminal_size(Rect::new(0, 0, 100, 30));
            state.open_drawer();
            state.advance(Duration::from_millis(300));
            state.click(black_box(10), black_box(8));
            state.active_screen()
        })
    });
}

criterion_group!(
    benches,
    bench_drawer_slide,
    bench_hit_test,
    bench_open_close_navigate
);
criterion_main!(benches);
