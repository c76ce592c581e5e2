//! Benchmarks for sparse matrix multiplication and element access

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crossmat::SparseMatrix;

/// Banded test matrix: main diagonal plus one super-diagonal
fn create_banded_matrix(n: usize, value: f64) -> SparseMatrix<f64> {
    let mut triplets = Vec::with_capacity(2 * n);
    for i in 0..n {
        triplets.push((i, i, value));
        if i + 1 < n {
            triplets.push((i, i + 1, value / 2.0));
        }
    }
    SparseMatrix::from_triplets(n, n, triplets).unwrap()
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[10usize, 25, 50] {
        let a = create_banded_matrix(n, 1.0);
        let b = create_banded_matrix(n, 2.0);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(a.multiply(black_box(&b)).unwrap()))
        });
    }

    group.finish();
}

fn bench_set_get(c: &mut Criterion) {
    let n = 100;

    c.bench_function("set_then_clear_diagonal", |bench| {
        bench.iter(|| {
            let mut m = SparseMatrix::new(n, n);
            for i in 0..n {
                m.set(i, n - 1 - i, 1.0).unwrap();
            }
            for i in 0..n {
                m.set(i, n - 1 - i, 0.0).unwrap();
            }
            black_box(m)
        })
    });

    let m = create_banded_matrix(n, 3.0);
    c.bench_function("get_dense_scan", |bench| {
        bench.iter(|| {
            let mut sum = 0.0;
            for i in 0..n {
                for j in 0..n {
                    sum += m.get(i, j).unwrap();
                }
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_matrix_multiply, bench_set_get);
criterion_main!(benches);
