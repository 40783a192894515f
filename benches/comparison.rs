use criterion::{criterion_group, criterion_main, Criterion};

use elemath::elementary;
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Inputs: a fixed sweep so every variant sees the same arguments
// ---------------------------------------------------------------------------

fn sweep(lo: f64, hi: f64) -> Vec<f64> {
    (0..64).map(|i| lo + (hi - lo) * i as f64 / 63.0).collect()
}

// ---------------------------------------------------------------------------
// Powers, exp, ln
// ---------------------------------------------------------------------------

fn powi(c: &mut Criterion) {
    let mut g = c.benchmark_group("powi");
    let xs = sweep(0.5, 2.0);

    g.bench_function("elemath", |b| {
        b.iter(|| xs.iter().map(|&x| elementary::powi(black_box(x), 13)).sum::<f64>())
    });

    g.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).powi(13)).sum::<f64>())
    });

    g.finish();
}

fn exp(c: &mut Criterion) {
    let mut g = c.benchmark_group("exp");
    let xs = sweep(-20.0, 20.0);

    g.bench_function("elemath", |b| {
        b.iter(|| xs.iter().map(|&x| elementary::exp(black_box(x))).sum::<f64>())
    });

    g.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).exp()).sum::<f64>())
    });

    g.finish();
}

fn ln(c: &mut Criterion) {
    let mut g = c.benchmark_group("ln");
    let xs = sweep(0.01, 100.0);

    g.bench_function("elemath", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| elementary::ln(black_box(x)).unwrap())
                .sum::<f64>()
        })
    });

    g.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).ln()).sum::<f64>())
    });

    g.finish();
}

fn powf(c: &mut Criterion) {
    let mut g = c.benchmark_group("powf");
    let xs = sweep(0.1, 3.9);

    g.bench_function("elemath", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&y| elementary::powf(black_box(1.7), y).unwrap())
                .sum::<f64>()
        })
    });

    g.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&y| black_box(1.7_f64).powf(y)).sum::<f64>())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Trigonometry
// ---------------------------------------------------------------------------

fn sin_cos(c: &mut Criterion) {
    let mut g = c.benchmark_group("sin_cos");
    let xs = sweep(-10.0, 10.0);

    g.bench_function("elemath", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| elementary::sin(black_box(x)) + elementary::cos(black_box(x)))
                .sum::<f64>()
        })
    });

    g.bench_function("std", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| black_box(x).sin() + black_box(x).cos())
                .sum::<f64>()
        })
    });

    g.finish();
}

fn asin(c: &mut Criterion) {
    let mut g = c.benchmark_group("asin");
    let xs = sweep(-0.99, 0.99);

    g.bench_function("elemath", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| elementary::asin(black_box(x)).unwrap())
                .sum::<f64>()
        })
    });

    g.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).asin()).sum::<f64>())
    });

    g.finish();
}

fn atan(c: &mut Criterion) {
    let mut g = c.benchmark_group("atan");
    let xs = sweep(-50.0, 50.0);

    g.bench_function("elemath", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| elementary::atan(black_box(x)).unwrap())
                .sum::<f64>()
        })
    });

    g.bench_function("std", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).atan()).sum::<f64>())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Polynomials
// ---------------------------------------------------------------------------

fn poly_eval(c: &mut Criterion) {
    let mut g = c.benchmark_group("poly_eval_deg20");
    let p = elemath::poly::binom_exp(1.0_f64, 1, -0.5, 0, 20).unwrap();
    let xs = sweep(-1.0, 1.0);

    g.bench_function("elemath", |b| {
        b.iter(|| xs.iter().map(|&x| p.eval(black_box(x))).sum::<f64>())
    });

    g.bench_function("integrate_differentiate", |b| {
        b.iter(|| {
            let mut q = black_box(&p).clone();
            q.integrate().unwrap();
            q.differentiate();
            q
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, powi, exp, ln, powf, sin_cos, asin, atan, poly_eval);
criterion_main!(benches);
