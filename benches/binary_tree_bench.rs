//! Benchmark for BinaryTree vs standard BTreeMap.
//!
//! Keys are inserted in a shuffled order; sorted insertion degenerates an
//! unbalanced tree into a list and is measured separately.

use arborlist::tree::{BinaryTree, TraversalOrder};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

/// Deterministic permutation of `0..size` from a linear congruential generator.
fn shuffled_keys(size: u32) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..size).collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for index in (1..keys.len()).rev() {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let other = usize::try_from(state >> 33).unwrap_or(0) % (index + 1);
        keys.swap(index, other);
    }
    keys
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000] {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("BinaryTree", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut tree = BinaryTree::new();
                for &key in keys {
                    tree.insert(black_box(key), black_box(key * 2));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn benchmark_insert_sorted(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_sorted");

    for size in [100, 1000] {
        group.bench_with_input(BenchmarkId::new("BinaryTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut tree = BinaryTree::new();
                for key in 0..size {
                    tree.insert(black_box(key), ());
                }
                black_box(tree)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000] {
        let keys = shuffled_keys(size);
        let tree: BinaryTree<u32, u32> = keys.iter().map(|&key| (key, key * 2)).collect();
        let map: BTreeMap<u32, u32> = keys.iter().map(|&key| (key, key * 2)).collect();

        group.bench_with_input(BenchmarkId::new("BinaryTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0u64;
                for key in 0..size {
                    if let Ok(&value) = tree.get(&black_box(key)) {
                        sum += u64::from(value);
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0u64;
                for key in 0..size {
                    if let Some(&value) = map.get(&black_box(key)) {
                        sum += u64::from(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000] {
        let keys = shuffled_keys(size);
        let tree: BinaryTree<u32, u32> = keys.iter().map(|&key| (key, key)).collect();
        let map: BTreeMap<u32, u32> = keys.iter().map(|&key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("BinaryTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut tree = tree.clone();
                for key in 0..size {
                    let _ = tree.remove(&black_box(key));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = map.clone();
                for key in 0..size {
                    map.remove(&black_box(key));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// traverse Benchmark
// =============================================================================

fn benchmark_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse");
    let tree: BinaryTree<u32, u32> = shuffled_keys(1000).into_iter().map(|key| (key, key)).collect();

    for order in TraversalOrder::ALL {
        group.bench_with_input(BenchmarkId::new("BinaryTree", order), &order, |bencher, &order| {
            bencher.iter(|| {
                let mut sum = 0u64;
                tree.traverse(order, |_, value| sum += u64::from(*value));
                black_box(sum)
            });
        });
    }

    group.bench_function("iter", |bencher| {
        bencher.iter(|| black_box(tree.values().map(|&value| u64::from(value)).sum::<u64>()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_insert_sorted,
    benchmark_get,
    benchmark_remove,
    benchmark_traverse
);
criterion_main!(benches);
