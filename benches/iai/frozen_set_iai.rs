//! IAI-Callgrind benchmark for FrozenSet construction and lookup.
//!
//! Measures instruction counts for sorting at construction and for a full
//! sweep of present and absent probes.
//! Data sizes: 16 (keyword tables), 256 and 1024 (large tables).

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use frozen_lookup::FrozenSet;
use std::hint::black_box;

fn scrambled<const N: usize>() -> [u32; N] {
    std::array::from_fn(|index| ((index * 7919) % N) as u32 * 2)
}

// Setup functions for different data sizes
fn setup_keys_16() -> [u32; 16] {
    scrambled()
}

fn setup_keys_256() -> [u32; 256] {
    scrambled()
}

fn setup_keys_1024() -> [u32; 1024] {
    scrambled()
}

fn setup_set_16() -> FrozenSet<u32, 16> {
    FrozenSet::new(scrambled())
}

fn setup_set_256() -> FrozenSet<u32, 256> {
    FrozenSet::new(scrambled())
}

fn setup_set_1024() -> FrozenSet<u32, 1024> {
    FrozenSet::new(scrambled())
}

fn sweep<const N: usize>(set: &FrozenSet<u32, N>) -> usize {
    (0..(N as u32 * 2))
        .filter(|probe| set.find(black_box(probe)).is_some())
        .count()
}

// Runtime construction benchmarks
#[library_benchmark]
#[bench::with_setup(setup_keys_16())]
fn new_16(keys: [u32; 16]) -> FrozenSet<u32, 16> {
    black_box(FrozenSet::new(black_box(keys)))
}

#[library_benchmark]
#[bench::with_setup(setup_keys_256())]
fn new_256(keys: [u32; 256]) -> FrozenSet<u32, 256> {
    black_box(FrozenSet::new(black_box(keys)))
}

#[library_benchmark]
#[bench::with_setup(setup_keys_1024())]
fn new_1024(keys: [u32; 1024]) -> FrozenSet<u32, 1024> {
    black_box(FrozenSet::new(black_box(keys)))
}

// Const engine invoked at runtime, for comparison with the generic sort
#[library_benchmark]
#[bench::with_setup(setup_keys_1024())]
fn from_array_const_1024(keys: [u32; 1024]) -> FrozenSet<u32, 1024> {
    black_box(FrozenSet::<u32, 1024>::from_array_const(black_box(keys)))
}

// Lookup sweeps: every even probe hits, every odd probe misses
#[library_benchmark]
#[bench::with_setup(setup_set_16())]
fn find_sweep_16(set: FrozenSet<u32, 16>) -> usize {
    black_box(sweep(&set))
}

#[library_benchmark]
#[bench::with_setup(setup_set_256())]
fn find_sweep_256(set: FrozenSet<u32, 256>) -> usize {
    black_box(sweep(&set))
}

#[library_benchmark]
#[bench::with_setup(setup_set_1024())]
fn find_sweep_1024(set: FrozenSet<u32, 1024>) -> usize {
    black_box(sweep(&set))
}

library_benchmark_group!(
    name = frozen_set_group;
    benchmarks =
        new_16, new_256, new_1024, from_array_const_1024,
        find_sweep_16, find_sweep_256, find_sweep_1024
);

main!(library_benchmark_groups = frozen_set_group);
