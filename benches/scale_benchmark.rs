// ============================================================================
// Scale Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Linear - 1-D stretch and shrink through LinearWrite
// 2. Grid - 2-D upscale through GridWrite
// 3. Masked - the same grid split into bands, one pass per band
// 4. Planning - clip/delta computation alone
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndscale::prelude::*;
use std::hint::black_box;

// ============================================================================
// Linear Benchmarks
// ============================================================================

fn benchmark_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");

    for len in [64, 1024, 16384].iter() {
        let src: Vec<u32> = (0..*len as u32).collect();

        group.bench_with_input(BenchmarkId::new("stretch_x2", len), &src, |b, src| {
            let mut dst = vec![0u32; src.len() * 2];
            let area = DstArea::new([0], [dst.len() as i32]);
            let source = SrcArea::from_ints([0], [src.len() as i32]);
            b.iter(|| {
                scale(area, source, &mut LinearWrite::new(&mut dst, src), area);
                black_box(&dst);
            });
        });

        group.bench_with_input(BenchmarkId::new("shrink_x2", len), &src, |b, src| {
            let mut dst = vec![0u32; src.len() / 2];
            let area = DstArea::new([0], [dst.len() as i32]);
            let source = SrcArea::from_ints([0], [src.len() as i32]);
            b.iter(|| {
                scale(area, source, &mut LinearWrite::new(&mut dst, src), area);
                black_box(&dst);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Grid Benchmarks
// ============================================================================

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    let src: Vec<u8> = (0..64 * 64).map(|i| (i % 256) as u8).collect();

    for size in [128usize, 256, 512].iter() {
        let config = ScaleConfig::grid(*size as i32, *size as i32, 64, 64);

        group.bench_with_input(BenchmarkId::new("upscale", size), size, |b, &size| {
            let mut dst = vec![0u8; size * size];
            b.iter(|| {
                scale_with(&config, &mut GridWrite::new(&mut dst, size, &src, 64));
                black_box(&dst);
            });
        });

        group.bench_with_input(BenchmarkId::new("banded_x8", size), size, |b, &size| {
            let mut dst = vec![0u8; size * size];
            b.iter(|| {
                for band in config.destination.bands(1, 8) {
                    let banded = config.with_mask(band);
                    scale_with(&banded, &mut GridWrite::new(&mut dst, size, &src, 64));
                }
                black_box(&dst);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Planning Benchmarks
// ============================================================================

fn benchmark_plan(c: &mut Criterion) {
    let dst = DstArea::new([640, 0, 0], [0, 480, 16]);
    let src = SrcArea::from_ints([0, 0, 0], [320, 240, 4]);
    let mask = DstArea::new([100, 100, 0], [300, 200, 16]);

    c.bench_function("plan_3d_masked", |b| {
        b.iter(|| black_box(Plan::new(black_box(dst), black_box(src), black_box(mask))));
    });
}

criterion_group!(benches, benchmark_linear, benchmark_grid, benchmark_plan);
criterion_main!(benches);
