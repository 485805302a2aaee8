//! Criterion benchmarks for posterior updates and the logistic sigmoid.
//!
//! These are the per-request hotpaths of the probability endpoints.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dt_math::{posterior_negative, posterior_positive, sigmoid};

fn bench_posterior(c: &mut Criterion) {
    c.bench_function("posterior_positive", |b| {
        b.iter(|| {
            posterior_positive(black_box(0.01), black_box(0.99), black_box(0.05))
                .expect("valid inputs")
        })
    });

    c.bench_function("posterior_negative", |b| {
        b.iter(|| {
            posterior_negative(black_box(0.5), black_box(0.9), black_box(0.1))
                .expect("valid inputs")
        })
    });
}

fn bench_sigmoid(c: &mut Criterion) {
    c.bench_function("sigmoid_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in -50..=50 {
                acc += sigmoid(black_box(i as f64 / 10.0));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_posterior, bench_sigmoid);
criterion_main!(benches);
