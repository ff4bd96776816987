//! Performance measurement for whole-mosaic rendering

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use photomosaic::assembler::{MosaicRequest, render};
use photomosaic::canvas::Canvas;
use photomosaic::catalog::Catalog;
use photomosaic::metric::MetricKind;
use std::hint::black_box;

fn synthetic_catalog(count: usize, kind: MetricKind) -> Option<Catalog> {
    let mut catalog = Catalog::new(kind);
    for index in 0..count {
        let tile = Canvas::from_fn(format!("tile-{index}"), 8, 8, |x, y| {
            let v = ((index * 53 + x * 7 + y * 19) % 256) as u8;
            [v, v.wrapping_add(40), v.wrapping_mul(5)]
        })
        .ok()?;
        catalog.add(tile).ok()?;
    }
    Some(catalog)
}

fn synthetic_target(side: usize) -> Option<Canvas> {
    Canvas::from_fn("target", side, side, |x, y| {
        let v = ((x * 31 + y * 47) % 256) as u8;
        [v, v.wrapping_mul(2), v.wrapping_add(100)]
    })
    .ok()
}

/// Measures a full render as the target grid grows
fn bench_render_by_target_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for side in &[64, 128, 256] {
        let Some(mut catalog) = synthetic_catalog(120, MetricKind::Rgb) else {
            group.finish();
            return;
        };
        let Some(target) = synthetic_target(*side) else {
            group.finish();
            return;
        };
        let Ok(request) = MosaicRequest::new(8, 50, 1.0) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                catalog.reset_placements();
                let mosaic = render(black_box(&target), &request, &mut catalog);
                black_box(mosaic)
            });
        });
    }

    group.finish();
}

/// Compares render cost across the metric hierarchy on one target
fn bench_render_by_metric_kind(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_metric");

    for kind in [
        MetricKind::Intensity,
        MetricKind::Rgb,
        MetricKind::QuadIntensity,
        MetricKind::QuadRgb,
    ] {
        let Some(mut catalog) = synthetic_catalog(120, kind) else {
            group.finish();
            return;
        };
        let Some(target) = synthetic_target(96) else {
            group.finish();
            return;
        };
        let Ok(request) = MosaicRequest::new(8, 50, 0.0) else {
            group.finish();
            return;
        };

        group.bench_function(BenchmarkId::from_parameter(kind), |b| {
            b.iter(|| {
                catalog.reset_placements();
                let mosaic = render(black_box(&target), &request, &mut catalog);
                black_box(mosaic)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_by_target_size,
    bench_render_by_metric_kind
);
criterion_main!(benches);
