use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use villa::FloatSeq;

const LEN: usize = 100_000;

fn insert_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_single");
    group.bench_function("gap_shift_front", |b| {
        b.iter_batched_ref(
            || FloatSeq::zeroed(LEN),
            |s| s.insert(1, &[black_box(1.)]),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("gap_shift_back", |b| {
        b.iter_batched_ref(
            || FloatSeq::zeroed(LEN),
            |s| s.insert(LEN, &[black_box(1.)]),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("append_then_shuffle_front", |b| {
        b.iter_batched_ref(
            || vec![0f64; LEN],
            |s| {
                let tail = s.split_off(1);
                s.push(black_box(1.));
                s.extend(tail);
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("push_then_copy_front", |b| {
        b.iter_batched_ref(
            || vec![0f64; LEN],
            |s| {
                s.push(0.);
                s.copy_within(1..LEN, 2);
                s[1] = black_box(1.);
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn insert_bulk(c: &mut Criterion) {
    let values = vec![1f64; 1024];
    let mut group = c.benchmark_group("insert_bulk");
    for (name, spare) in [("spare_capacity", values.len()), ("full", 0)] {
        group.bench_function(format!("front_{name}"), |b| {
            b.iter_batched_ref(
                || {
                    let mut s = FloatSeq::with_capacity(LEN + spare);
                    s.add(&vec![0.; LEN]);
                    s
                },
                |s| s.insert(0, black_box(&values)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("back_{name}"), |b| {
            b.iter_batched_ref(
                || {
                    let mut s = FloatSeq::with_capacity(LEN + spare);
                    s.add(&vec![0.; LEN]);
                    s
                },
                |s| s.insert(LEN, black_box(&values)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, insert_single, insert_bulk);
criterion_main!(benches);
