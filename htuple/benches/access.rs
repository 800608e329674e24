use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htuple::prelude::*;

type Wide = Tuple![u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64];

fn wide() -> Wide {
    tuple![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");
    let t = wide();
    let array = [0u64; 16];

    group.bench_function("list/first", |b| b.iter(|| *black_box(&t).at::<0>()));
    group.bench_function("list/last", |b| b.iter(|| *black_box(&t).at::<15>()));
    group.bench_function("array/last", |b| b.iter(|| *black_box(&array).at::<15>()));
    group.bench_function("dyn/last", |b| {
        b.iter(|| {
            black_box(&t)
                .get_dyn(black_box(15))
                .ok()
                .and_then(|slot| slot.downcast_ref::<u64>().copied())
        })
    });
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let (a, mut b) = (wide(), wide());
    *b.at_mut::<15>() += 1;

    group.bench_function("eq/equal", |bench| bench.iter(|| black_box(&a) == black_box(&a)));
    group.bench_function("lt/last-differs", |bench| {
        bench.iter(|| black_box(&a) < black_box(&b))
    });
    group.bench_function("cmp/last-differs", |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&b)))
    });
    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    c.bench_function("concat/4x4", |b| {
        b.iter(|| {
            htuple::concat(black_box((
                tuple![0u64, 1, 2, 3],
                (4u64, 5, 6, 7),
                [8u64, 9, 10, 11],
                tuple![12u64, 13, 14, 15],
            )))
        })
    });
}

criterion_group!(benches, bench_access, bench_compare, bench_concat);
criterion_main!(benches);
