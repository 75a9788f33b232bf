//! Polynomial fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K points)
//! - Degree sweep (0 to 12)
//! - Evaluation and statistics over fitted coefficients
//! - Realistic scenarios (calibration curves, trajectories)
//!
//! Multi-degree fits run sequentially by default. Use
//! `POLYFIT_MODE=parallel cargo bench` to fit degrees concurrently.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use polyfit::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("POLYFIT_MODE").ok().as_deref() {
        Some("parallel") => (true, "parallel"),
        _ => (false, "serial"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy cubic on `[-1, 1]`.
fn generate_cubic_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<f64> = (0..size)
        .map(|i| -1.0 + 2.0 * i as f64 / size as f64)
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.5 - xi + 2.0 * xi.powi(3) + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate a sensor calibration curve (saturating response, uneven x).
fn generate_calibration_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x_dist = Uniform::new(0.0, 5.0).unwrap();
    let noise_dist = Normal::new(0.0, 0.02).unwrap();

    let x: Vec<f64> = (0..size).map(|_| x_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 1.0 - (-0.8 * xi).exp() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate a projectile trajectory with measurement noise.
fn generate_trajectory_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let t: Vec<f64> = (0..size).map(|i| i as f64 * 4.0 / size as f64).collect();
    let h: Vec<f64> = t
        .iter()
        .map(|&ti| 1.5 + 19.6 * ti - 4.9 * ti * ti + noise_dist.sample(&mut rng))
        .collect();
    (t, h)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_cubic_data(size, 42);

        group.bench_with_input(BenchmarkId::new("degree_3", size), &size, |b, _| {
            b.iter(|| {
                Polyfit::new(black_box(&x), black_box(&y))
                    .unwrap()
                    .compute_coefficients(3)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_degree(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree");
    group.sample_size(100);

    let (x, y) = generate_cubic_data(5_000, 42);
    let fit = Polyfit::new(&x, &y).unwrap();

    for degree in [0usize, 1, 2, 4, 6, 8, 12] {
        group.bench_with_input(BenchmarkId::new("coefficients", degree), &degree, |b, &d| {
            b.iter(|| fit.compute_coefficients(black_box(d)).unwrap())
        });
    }
    group.finish();
}

fn bench_degree_sweep(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("degree_sweep_{}", mode_name));
    group.sample_size(50);

    let degrees: Vec<usize> = (0..=12).collect();

    for size in [1_000, 20_000] {
        let (x, y) = generate_cubic_data(size, 7);
        let fit = Polyfit::new(&x, &y).unwrap();

        group.bench_with_input(BenchmarkId::new("all_degrees", size), &size, |b, _| {
            b.iter(|| {
                if use_parallel {
                    fit.par_compute_coefficients_for(black_box(&degrees[..]))
                        .unwrap()
                } else {
                    fit.compute_coefficients_for(black_box(&degrees[..]))
                        .unwrap()
                }
            })
        });
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    group.sample_size(100);

    for size in [1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_cubic_data(size, 42);
        let fit = Polyfit::new(&x, &y).unwrap();
        let terms = fit.compute_coefficients(3).unwrap();

        group.bench_with_input(BenchmarkId::new("correlation", size), &size, |b, _| {
            b.iter(|| fit.correlation_coefficient(black_box(&terms)))
        });
        group.bench_with_input(BenchmarkId::new("standard_error", size), &size, |b, _| {
            b.iter(|| fit.standard_error(black_box(&terms)))
        });
    }
    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    group.sample_size(100);

    let (x, y) = generate_cubic_data(1_000, 42);
    let fit = Polyfit::new(&x, &y).unwrap();
    let grid: Vec<f64> = (0..10_000).map(|i| -1.0 + i as f64 * 2e-4).collect();

    for degree in [3usize, 8] {
        let poly = fit.polynomial(degree).unwrap();
        group.throughput(Throughput::Elements(grid.len() as u64));

        group.bench_with_input(BenchmarkId::new("grid", degree), &degree, |b, _| {
            b.iter(|| poly.evaluate_all(black_box(&grid)))
        });
    }
    group.finish();
}

fn bench_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios");
    group.sample_size(100);

    let (x, y) = generate_calibration_data(2_000, 11);
    group.bench_function("calibration_degree_5", |b| {
        b.iter(|| {
            let fit = Polyfit::new(black_box(&x), black_box(&y)).unwrap();
            let terms = fit.compute_coefficients(5).unwrap();
            fit.statistics(&terms)
        })
    });

    let (t, h) = generate_trajectory_data(2_000, 13);
    group.bench_function("trajectory_degree_2", |b| {
        b.iter(|| {
            Polyfit::new(black_box(&t), black_box(&h))
                .unwrap()
                .to_expression(2)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_degree,
    bench_degree_sweep,
    bench_statistics,
    bench_evaluation,
    bench_scenarios,
);

criterion_main!(benches);
