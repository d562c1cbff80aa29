use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matrix_alias::{DynMatrixAlias, Major, Matrix, MatrixAlias, StaticLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn bench_linear_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_index");
    for size in [16usize, 64, 256] {
        let elements = size * size;
        group.throughput(Throughput::Elements(elements as u64));

        let fixed = StaticLayout::row_major([size, size]);
        group.bench_with_input(BenchmarkId::new("static", size), &size, |b, &n| {
            b.iter(|| {
                let mut acc = 0usize;
                for i in 0..n {
                    for j in 0..n {
                        acc += fixed.linear_index(black_box(&[i, j]));
                    }
                }
                acc
            })
        });

        let data = vec![0u8; elements];
        let dynamic = DynMatrixAlias::new(&data, &[size, size], Major::Row).unwrap();
        group.bench_with_input(BenchmarkId::new("dynamic", size), &size, |b, &n| {
            b.iter(|| {
                let mut acc = 0usize;
                for i in 0..n {
                    for j in 0..n {
                        acc += dynamic.linear_index(black_box(&[i, j]));
                    }
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let size = 256usize;
    let m = Matrix::<f64, 2>::from_fn([size, size], |_| rng.gen::<f64>());
    let alias = MatrixAlias::new(m.as_slice(), StaticLayout::row_major([size, size])).unwrap();

    let mut group = c.benchmark_group("access");
    group.throughput(Throughput::Elements((size * size) as u64));

    group.bench_function("checked_at", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..size {
                for j in 0..size {
                    sum += alias.at(black_box([i, j])).copied().unwrap();
                }
            }
            sum
        })
    });

    group.bench_function("indexed", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..size {
                for j in 0..size {
                    sum += alias[black_box([i, j])];
                }
            }
            sum
        })
    });

    group.bench_function("unchecked", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..size {
                for j in 0..size {
                    sum += unsafe { *alias.get_unchecked(black_box([i, j])) };
                }
            }
            sum
        })
    });

    group.finish();
}

criterion_group!(benches, bench_linear_index, bench_access);
criterion_main!(benches);
