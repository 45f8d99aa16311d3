//! FrozenSet construction and lookup benchmark.
//!
//! Compares `FrozenSet::new` and `FrozenSet::find` against `BTreeSet` and a
//! sorted `Vec` with `binary_search` (baselines).
//! Expected: lookups on a FrozenSet should match the sorted Vec and beat
//! BTreeSet for every size, since both search one contiguous array.
//!
//! Key arrays are generated once per size and copied in setup so every
//! iteration sorts the same scrambled input.

use criterion::{BatchSize, BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use criterion::measurement::WallTime;
use frozen_lookup::FrozenSet;
use std::collections::BTreeSet;
use std::hint::black_box;

/// Generates `N` distinct keys in a scrambled order.
fn generate_scrambled_keys<const N: usize>() -> [u32; N] {
    // 7919 is coprime with every power of two, so the stride visits each residue once.
    std::array::from_fn(|index| ((index * 7919) % N) as u32 * 2)
}

/// Probes alternate between present (even) and absent (odd) keys.
fn generate_probes<const N: usize>() -> Vec<u32> {
    (0..(N as u32 * 2)).collect()
}

fn construction_for_size<const N: usize>(group: &mut BenchmarkGroup<'_, WallTime>) {
    let keys = generate_scrambled_keys::<N>();

    group.bench_with_input(BenchmarkId::new("frozen_set", N), &N, |bencher, _| {
        bencher.iter_batched(
            || keys,
            |keys| black_box(FrozenSet::new(black_box(keys))),
            BatchSize::SmallInput,
        );
    });

    group.bench_with_input(BenchmarkId::new("btree_set", N), &N, |bencher, _| {
        bencher.iter_batched(
            || keys,
            |keys| black_box(BTreeSet::from(black_box(keys))),
            BatchSize::SmallInput,
        );
    });

    group.bench_with_input(BenchmarkId::new("sorted_vec", N), &N, |bencher, _| {
        bencher.iter_batched(
            || keys.to_vec(),
            |mut keys| {
                keys.sort_unstable();
                black_box(keys)
            },
            BatchSize::SmallInput,
        );
    });
}

fn lookup_for_size<const N: usize>(group: &mut BenchmarkGroup<'_, WallTime>) {
    let keys = generate_scrambled_keys::<N>();
    let probes = generate_probes::<N>();

    let frozen = FrozenSet::new(keys);
    let btree = BTreeSet::from(keys);
    let mut sorted = keys.to_vec();
    sorted.sort_unstable();

    group.bench_with_input(BenchmarkId::new("frozen_set", N), &N, |bencher, _| {
        bencher.iter(|| {
            probes
                .iter()
                .filter(|probe| frozen.find(black_box(*probe)).is_some())
                .count()
        });
    });

    group.bench_with_input(BenchmarkId::new("btree_set", N), &N, |bencher, _| {
        bencher.iter(|| {
            probes
                .iter()
                .filter(|probe| btree.contains(black_box(*probe)))
                .count()
        });
    });

    group.bench_with_input(BenchmarkId::new("sorted_vec", N), &N, |bencher, _| {
        bencher.iter(|| {
            probes
                .iter()
                .filter(|probe| sorted.binary_search(black_box(*probe)).is_ok())
                .count()
        });
    });
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("frozen_set_construction");

    construction_for_size::<8>(&mut group);
    construction_for_size::<64>(&mut group);
    construction_for_size::<256>(&mut group);
    construction_for_size::<1024>(&mut group);

    group.finish();
}

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("frozen_set_lookup");

    lookup_for_size::<8>(&mut group);
    lookup_for_size::<64>(&mut group);
    lookup_for_size::<256>(&mut group);
    lookup_for_size::<1024>(&mut group);

    group.finish();
}

fn benchmark_const_lookup(criterion: &mut Criterion) {
    static KEYWORDS: FrozenSet<&str, 12> = FrozenSet::<&str, 12>::from_array_const([
        "as", "break", "const", "else", "enum", "fn", "if", "let", "loop", "match", "return",
        "while",
    ]);
    let probes = ["fn", "struct", "while", "impl", "as", "yield"];

    let mut group = criterion.benchmark_group("frozen_set_const_lookup");

    group.bench_function("contains", |bencher| {
        bencher.iter(|| {
            probes
                .iter()
                .filter(|probe| KEYWORDS.contains(black_box(*probe)))
                .count()
        });
    });

    group.bench_function("contains_const", |bencher| {
        bencher.iter(|| {
            probes
                .iter()
                .filter(|probe| KEYWORDS.contains_const(black_box(**probe)))
                .count()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_lookup,
    benchmark_const_lookup
);

criterion_main!(benches);
