#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for flood fill and border tracing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

/// Canvas with a black square outline inset by `margin` on every side.
fn outlined(margin: i32) -> Framebuffer {
    let mut fb = Framebuffer::new(800, 650).expect("framebuffer creation should succeed");
    let (w, h) = (800 - margin, 650 - margin);
    draw_polygon(
        &mut fb,
        &[
            Point::new(margin, margin),
            Point::new(w, margin),
            Point::new(w, h),
            Point::new(margin, h),
        ],
        Color::BLACK,
    );
    fb
}

fn flood_fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    group.sample_size(20);

    for margin in [300, 150, 10] {
        let template = outlined(margin);
        group.bench_with_input(BenchmarkId::from_parameter(margin), &margin, |b, _| {
            b.iter(|| {
                let mut fb = template.clone();
                fb.sample_base(400, 325);
                flood_fill(&mut fb, black_box(Point::new(400, 325)), Color::RED)
            });
        });
    }

    group.finish();
}

fn texture_fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_texture");
    group.sample_size(20);

    let mut source = Framebuffer::new(16, 16).expect("framebuffer creation should succeed");
    for y in 0..16 {
        source.fill_span(0, 8, y, if y < 8 { Color::RED } else { Color::BLUE });
    }
    let texture = Texture::from_framebuffer(&source);
    let template = outlined(150);

    group.bench_function("800x650_inset_150", |b| {
        b.iter(|| {
            let mut fb = template.clone();
            fb.sample_base(400, 325);
            fill_texture(&mut fb, black_box(Point::new(400, 325)), &texture, Point::new(400, 325))
        });
    });

    group.finish();
}

fn border_trace_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_border");

    for margin in [300, 10] {
        let fb = outlined(margin);
        group.bench_with_input(BenchmarkId::from_parameter(margin), &margin, |b, _| {
            b.iter(|| trace_border(&fb, black_box(Point::new(400, 325)), DEFAULT_SIMILARITY_THRESHOLD));
        });
    }

    group.finish();
}

criterion_group!(benches, flood_fill_benchmark, texture_fill_benchmark, border_trace_benchmark);
criterion_main!(benches);
