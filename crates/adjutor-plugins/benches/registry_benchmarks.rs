//! Benchmarks for plugin lookup and median imputation
//!
//! Run with: cargo bench -p adjutor-plugins

use adjutor_core::{Hyperparams, Matrix};
use adjutor_plugins::{ImputerPlugin, Imputers};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Matrix with every seventh cell missing
fn dataset(rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols)
        .map(|i| if i % 7 == 0 { f64::NAN } else { (i % 101) as f64 })
        .collect();
    Matrix::new(rows, cols, data).unwrap()
}

fn benchmark_registry_get(c: &mut Criterion) {
    let imputers = Imputers::new();
    let params = Hyperparams::new();

    c.bench_function("imputers_get_median", |b| {
        b.iter(|| imputers.get(black_box("median"), &params).unwrap())
    });
}

fn benchmark_median_fit_transform(c: &mut Criterion) {
    let imputers = Imputers::new();

    let mut group = c.benchmark_group("median_fit_transform");
    for rows in [100, 1_000, 10_000] {
        let x = dataset(rows, 20);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &x, |b, x| {
            let mut plugin = imputers.get("median", &Hyperparams::new()).unwrap();
            b.iter(|| plugin.fit_transform(black_box(x)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_registry_get, benchmark_median_fit_transform);
criterion_main!(benches);
