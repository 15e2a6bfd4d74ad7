//! Benchmarks for board validation.

use battlefield::prelude::*;
use battlefield::testing::{board_with, valid_fleet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn validate_benchmark(c: &mut Criterion) {
    let fleet = valid_fleet();
    let bent = board_with(&[(0, 0), (0, 1), (1, 1)]);

    c.bench_function("valid_fleet", |b| {
        b.iter(|| validate_battlefield(black_box(&fleet)))
    });

    c.bench_function("bent_ship", |b| {
        b.iter(|| validate_battlefield(black_box(&bent)))
    });

    c.bench_function("fleet_count", |b| {
        let counter = FleetCounter::new();
        b.iter(|| counter.count(black_box(&fleet)))
    });
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
