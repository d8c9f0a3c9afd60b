extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_priority_queue::IndexedPriorityQueue;

mod generators;
use crate::generators::{choose_some, gen_random_usizes, gen_repeating_keys};

pub fn bench_select(c: &mut Criterion) {
    let base_keys: Vec<usize> = (0..500_000).collect();
    let base_values = gen_random_usizes(500_000, 7);

    let mut group = c.benchmark_group("get_priority_usize");
    for &size in &[10_000, 500_000] {
        let test_keys: Vec<_> = choose_some(&base_keys[..size], 500, 500);
        let queue: IndexedPriorityQueue<_, _> = base_keys[..size]
            .iter()
            .copied()
            .zip(base_values[..size].iter().copied())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                for k in test_keys.iter() {
                    black_box(queue.get_priority(k));
                }
            });
        });
    }
    group.finish();

    // Walks all occurrences of selected key
    let mut group = c.benchmark_group("select_repeated_keys");
    let values = gen_random_usizes(200_000, 5);
    for &distinct in &[100, 10_000, 100_000] {
        let keys = gen_repeating_keys(values.len(), distinct, 6);
        let test_keys = gen_repeating_keys(500, distinct, 7);
        let queue: IndexedPriorityQueue<usize, usize> =
            keys.iter().copied().zip(values.iter().copied()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(distinct), &distinct, |b, _| {
            b.iter(|| {
                for k in test_keys.iter() {
                    if let Ok((_, priorities)) = queue.select(k) {
                        black_box(priorities.min());
                    }
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
