extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use indexed_priority_queue::IndexedPriorityQueue;

mod generators;
use crate::generators::{choose_some, gen_random_usizes, get_unique_random_strings};

pub fn bench_change_priority(c: &mut Criterion) {
    let base_keys: Vec<usize> = (0..500_000).collect();
    let base_values = gen_random_usizes(500_000, 7);

    let mut group = c.benchmark_group("change_priority_usize");
    for &size in &[10_000, 500_000] {
        let test_keys: Vec<_> = choose_some(&base_keys[..size], 500, 500);
        let test_vals: Vec<_> = gen_random_usizes(500, 564);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: IndexedPriorityQueue<_, _> = base_keys[..size]
                .iter()
                .copied()
                .zip(base_values[..size].iter().copied())
                .collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (&k, &v) in test_keys.iter().zip(test_vals.iter()) {
                        black_box(queue.change_priority(&k, v).ok());
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("change_priority_string_keys");
    let base_keys = get_unique_random_strings(50_000, 0);
    let base_values = gen_random_usizes(50_000, 7);

    for &size in &[1_000, 50_000] {
        let test_keys: Vec<_> = choose_some(&base_keys[..size], 500, 500);
        let test_vals: Vec<_> = gen_random_usizes(500, 564);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: IndexedPriorityQueue<String, usize> = base_keys[..size]
                .iter()
                .cloned()
                .zip(base_values[..size].iter().copied())
                .collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (k, &v) in test_keys.iter().zip(test_vals.iter()) {
                        black_box(queue.change_priority(k.as_str(), v).ok());
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_change_priority);
criterion_main!(benches);
