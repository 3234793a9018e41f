//! Pipeline benchmarks: generation, edge extraction, stitching
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use marchlands::border::{extract_edges, stitch_paths};
use marchlands::core::config::MapConfig;
use marchlands::territory::generate;

fn bench_pipeline(c: &mut Criterion) {
    for (label, width, height, radius) in [("15x15", 15, 15, 2), ("60x60", 60, 60, 6)] {
        let config = MapConfig {
            width,
            height,
            radius,
            ..MapConfig::default()
        };

        c.bench_function(&format!("generate_{}", label), |b| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                black_box(generate(black_box(&config), &mut rng).unwrap())
            })
        });

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let map = generate(&config, &mut rng).unwrap();
        c.bench_function(&format!("extract_edges_{}", label), |b| {
            b.iter(|| black_box(extract_edges(black_box(&map))))
        });

        let edges = extract_edges(&map);
        c.bench_function(&format!("stitch_paths_{}", label), |b| {
            b.iter(|| black_box(stitch_paths(black_box(edges.clone()))))
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
