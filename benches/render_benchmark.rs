//! Performance benchmarks for dashboard rendering
//!
//! Measures frame render time at common terminal sizes and the cost of
//! search filtering.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use blockdash::adapters::mock::sample_snapshot;
use blockdash::models::{SeedData, Tab};
use blockdash::state::DashboardStore;
use blockdash::ui;
use ratatui::{backend::TestBackend, Terminal};

fn loaded_store() -> DashboardStore {
    let mut store = DashboardStore::new(SeedData::demo().expect("demo seed")).expect("store");
    store.apply_snapshot(sample_snapshot());
    store
}

/// Benchmark a full dashboard frame at several terminal sizes
fn bench_dashboard_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_frame");
    let store = loaded_store();

    for (width, height) in [(80u16, 24u16), (120, 40), (200, 60)] {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &store,
            |b, store| {
                b.iter(|| {
                    terminal
                        .draw(|f| {
                            let area = f.area();
                            let view = store.view();
                            ui::dashboard::render(f, area, black_box(&view), false);
                        })
                        .expect("draw");
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the blocks tab with an active search filter
fn bench_filtered_blocks_frame(c: &mut Criterion) {
    let mut store = loaded_store();
    store.set_active_tab(Tab::Blocks);
    store.set_search_text("15678");
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");

    c.bench_function("dashboard_frame_filtered_blocks", |b| {
        b.iter(|| {
            terminal
                .draw(|f| {
                    let area = f.area();
                    let view = store.view();
                    ui::dashboard::render(f, area, &view, true);
                })
                .expect("draw");
        });
    });
}

/// Benchmark building the view state and filtering without rendering
fn bench_view_filtering(c: &mut Criterion) {
    let mut store = loaded_store();
    store.set_search_text("0xabc");

    c.bench_function("view_filtered_transactions", |b| {
        b.iter(|| {
            let view = store.view();
            black_box(view.filtered_transactions().len())
        });
    });
}

criterion_group!(
    benches,
    bench_dashboard_frame,
    bench_filtered_blocks_frame,
    bench_view_filtering
);
criterion_main!(benches);
