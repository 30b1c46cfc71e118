//! Benchmarks for sheet transitions and layout resolution

use std::time::Duration;

use bottomsheet_test_utils::FrameDriver;
use bottomsheet_ui::{BottomSheetController, Presentation, SheetConfig, Viewport};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn setup() -> BottomSheetController {
    BottomSheetController::new(SheetConfig::default(), Viewport::default(), Presentation::Embedded)
        .unwrap()
}

fn bench_single_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_frame");

    group.bench_function("mid_transition_update", |b| {
        b.iter_batched(
            || {
                let mut sheet = setup();
                sheet.show();
                sheet
            },
            |mut sheet| black_box(sheet.update(Duration::from_millis(16))),
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("idle_update", |b| {
        let mut sheet = setup();
        b.iter(|| black_box(sheet.update(Duration::from_millis(16))));
    });

    group.finish();
}

fn bench_show_hide_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_hide_cycle");

    for fps in [30u64, 60, 120] {
        let driver = FrameDriver::new(Duration::from_micros(1_000_000 / fps));
        group.bench_with_input(BenchmarkId::from_parameter(fps), &driver, |b, driver| {
            let mut sheet = setup();
            b.iter(|| {
                sheet.show();
                driver.settle(&mut sheet);
                sheet.hide(None);
                driver.settle(&mut sheet);
                black_box(sheet.top_offset())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_frame, bench_show_hide_cycle);
criterion_main!(benches);
