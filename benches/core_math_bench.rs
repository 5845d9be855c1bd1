use criterion::{Criterion, criterion_group, criterion_main};
use narrative_rs::api::{NarrativeConfig, NarrativeEngine, project_chart};
use narrative_rs::core::{
    ContainerRect, ScrollMetrics, Viewport, YearRecord, YearSeries, derive_active_year,
};
use narrative_rs::interaction::{ComparisonDrag, PointerSample};
use narrative_rs::render::NullRenderer;
use std::hint::black_box;

fn generated_series(len: usize) -> YearSeries {
    YearSeries::from_records(
        (0..len)
            .map(|i| {
                let year = 1900 + i as i32;
                YearRecord::new(year, (i % 17) as u32, 400 + (i % 250) as u32)
            })
            .collect(),
    )
}

fn bench_active_year_sweep_1k(c: &mut Criterion) {
    let series = generated_series(1_000);

    c.bench_function("active_year_sweep_1k", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                let metrics = ScrollMetrics::new(f64::from(step) * 40.0, 900.0, 40_900.0);
                let _ = derive_active_year(black_box(&series), black_box(metrics));
            }
        })
    });
}

fn bench_comparison_drag_stream(c: &mut Criterion) {
    let rect = Some(ContainerRect::new(120.0, 960.0));

    c.bench_function("comparison_drag_stream_10k", |b| {
        b.iter(|| {
            let mut drag = ComparisonDrag::default();
            drag.jump_and_drag(&PointerSample::pointer(500.0), rect);
            for step in 0..10_000 {
                let client_x = f64::from(step % 1_200);
                let _ = drag.update_drag(black_box(&PointerSample::pointer(client_x)), rect);
            }
            drag.end_drag();
            drag.split_percent()
        })
    });
}

fn bench_chart_projection_1k(c: &mut Criterion) {
    let series = generated_series(1_000);
    let viewport = Viewport::new(1600, 240);

    c.bench_function("chart_projection_1k", |b| {
        b.iter(|| {
            let _ = project_chart(
                black_box(&series),
                black_box(Some(1_450)),
                black_box(viewport),
                black_box(30.0),
                black_box(50.0),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_engine_snapshot_json(c: &mut Criterion) {
    let mut engine = NarrativeEngine::new(NullRenderer::default(), NarrativeConfig::default())
        .expect("engine init");
    engine.set_records(generated_series(200).records().to_vec());
    engine.on_scroll(ScrollMetrics::new(2_000.0, 900.0, 6_000.0));

    c.bench_function("engine_snapshot_json_200", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_contract_v1_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_active_year_sweep_1k,
    bench_comparison_drag_stream,
    bench_chart_projection_1k,
    bench_engine_snapshot_json
);
criterion_main!(benches);
