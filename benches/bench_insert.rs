extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use indexed_priority_queue::IndexedPriorityQueue;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

mod generators;
use crate::generators::{gen_random_usizes, gen_repeating_keys, generate_worst_insert_data};

type FxQueue<K, P> = IndexedPriorityQueue<K, P, BuildHasherDefault<FxHasher>>;

pub fn bench_insert(c: &mut Criterion) {
    let base_keys = gen_random_usizes(500_000, 0);
    let base_values = gen_random_usizes(500_000, 7);

    let extra: Vec<(usize, usize)> = gen_random_usizes(1000, 8)
        .into_iter()
        .zip(gen_random_usizes(1000, 20))
        .collect();

    let mut group = c.benchmark_group("insert_usizes_random");
    for &size in &[100_000, 300_000, 500_000] {
        assert!(base_keys.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: IndexedPriorityQueue<usize, usize> = base_keys[..size]
                .iter()
                .copied()
                .zip(base_values[..size].iter().copied())
                .collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for &(k, v) in extra.iter() {
                        queue.insert(k, v);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    // Every inserted value becomes new minimum
    let base_keys: Vec<usize> = (0..500_000).collect();
    let (base_values, extra_values) =
        generate_worst_insert_data(gen_random_usizes(520_000, 7), 20_000, 987987);
    let extra: Vec<(usize, usize)> = (500_000..520_000).zip(extra_values).collect();

    let mut group = c.benchmark_group("insert_usizes_worst");
    for &size in &[100_000, 300_000, 500_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: IndexedPriorityQueue<usize, usize> = base_keys[..size]
                .iter()
                .copied()
                .zip(base_values[..size].iter().copied())
                .collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for &(k, v) in extra.iter() {
                        queue.insert(k, v);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    // Keys repeat so insertions grow occurrence stacks
    let mut group = c.benchmark_group("insert_repeated_keys");
    let values = gen_random_usizes(200_000, 11);
    for &distinct in &[10, 1_000, 100_000] {
        let keys = gen_repeating_keys(values.len(), distinct, 12);
        group.bench_with_input(
            BenchmarkId::from_parameter(distinct),
            &distinct,
            |b, &distinct| {
                b.iter_batched(
                    || FxQueue::<usize, usize>::with_capacity_and_hasher(distinct, Default::default()),
                    |mut queue| {
                        for (&k, &v) in keys.iter().zip(values.iter()) {
                            queue.insert(k, v);
                        }
                        queue
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
