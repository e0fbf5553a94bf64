//! IAI-Callgrind benchmark for the intersection primitives.
//!
//! Measures instruction counts for merge and probe on a 1000-element target
//! against allowed sets of 1000 and 1000000 elements.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sorted_intersect::{
    SortedVec, intersect_update_merge, intersect_update_merge_vec, intersect_update_probe,
};
use std::hint::black_box;

type Operands = (SortedVec<i32>, Vec<i32>);

fn setup_operands(allowed_size: i32) -> Operands {
    let allowed = SortedVec::from_sorted_vec((0..allowed_size).map(|value| value * 2).collect());
    let target = (0..1000).map(|value| value * (allowed_size / 1000)).collect();
    (allowed, target)
}

fn setup_comparable() -> Operands {
    setup_operands(1000)
}

fn setup_large_allowed() -> Operands {
    setup_operands(1_000_000)
}

// merge benchmarks
#[library_benchmark]
#[bench::comparable(setup_comparable())]
#[bench::large_allowed(setup_large_allowed())]
fn merge(operands: Operands) -> Vec<i32> {
    let (allowed, mut target) = operands;
    intersect_update_merge(black_box(&allowed), &mut target);
    black_box(target)
}

#[library_benchmark]
#[bench::comparable(setup_comparable())]
#[bench::large_allowed(setup_large_allowed())]
fn merge_vec(operands: Operands) -> Vec<i32> {
    let (allowed, mut target) = operands;
    intersect_update_merge_vec(black_box(&allowed), &mut target);
    black_box(target)
}

// probe benchmarks
#[library_benchmark]
#[bench::comparable(setup_comparable())]
#[bench::large_allowed(setup_large_allowed())]
fn probe(operands: Operands) -> Vec<i32> {
    let (allowed, mut target) = operands;
    intersect_update_probe(black_box(&allowed), &mut target);
    black_box(target)
}

library_benchmark_group!(
    name = intersection_update_group;
    benchmarks = merge, merge_vec, probe
);

main!(library_benchmark_groups = intersection_update_group);
