use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rayon::prelude::*;
use std::hint::black_box;

use goertzel::{detect, GoertzelFilter};

const DTMF_FREQS: [f64; 8] = [697.0, 770.0, 852.0, 941.0, 1209.0, 1336.0, 1477.0, 1633.0];

fn signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * 1209.0 * i as f64 / 8000.0).sin())
        .collect()
}

fn bench_single_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("goertzel_single");
    for &n in &[205usize, 1024, 8192] {
        let input = signal(n);
        let input32: Vec<f32> = input.iter().map(|&x| x as f32).collect();
        group.bench_with_input(BenchmarkId::new("f64", n), &input, |b, input| {
            b.iter(|| detect(black_box(input), 1209.0, 8000.0).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("f32", n), &input32, |b, input| {
            b.iter(|| detect(black_box(input), 1209.0f32, 8000.0).unwrap());
        });
    }
    group.finish();
}

fn bench_filter_bank(c: &mut Criterion) {
    let input = signal(8192);
    let mut filters: Vec<GoertzelFilter<f64>> = DTMF_FREQS
        .iter()
        .map(|&f| GoertzelFilter::new(f, 8000.0).unwrap())
        .collect();

    c.bench_function("dtmf_bank_serial", |b| {
        b.iter(|| {
            filters.iter_mut().for_each(|f| f.reset());
            filters
                .iter_mut()
                .map(|f| f.process(black_box(&input)).unwrap())
                .collect::<Vec<_>>()
        });
    });

    c.bench_function("dtmf_bank_parallel", |b| {
        b.iter(|| {
            filters.par_iter_mut().for_each(|f| f.reset());
            filters
                .par_iter_mut()
                .map(|f| f.process(black_box(&input)).unwrap())
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, bench_single_filter, bench_filter_bank);
criterion_main!(benches);
