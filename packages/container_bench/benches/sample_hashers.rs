//! Benchmark comparing the hash states used by the unordered containers in the catalog.
//!
//! The catalog reports whole-container costs; this isolates the hashing part of them.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hash::{BuildHasher, RandomState};
use std::hint::black_box;

use container_bench::{SampleHashState, Workload};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use foldhash::fast::RandomState as FoldHashState;
use hash_hasher::HashBuildHasher;

const WORKLOAD_LEN: usize = 10_000;

fn hash_all<S: BuildHasher>(state: &S, workload: &[u64]) -> u64 {
    workload
        .iter()
        .fold(0, |acc, sample| acc ^ state.hash_one(black_box(sample)))
}

fn entrypoint(c: &mut Criterion) {
    let workload = Workload::generate(WORKLOAD_LEN).unwrap();

    let mut group = c.benchmark_group("sample_hashers");
    group.throughput(Throughput::Elements(WORKLOAD_LEN as u64));

    group.bench_with_input(
        BenchmarkId::new("sip", WORKLOAD_LEN),
        &RandomState::new(),
        |b, state| b.iter(|| hash_all(state, &workload)),
    );

    group.bench_with_input(
        BenchmarkId::new("foldhash", WORKLOAD_LEN),
        &FoldHashState::default(),
        |b, state| b.iter(|| hash_all(state, &workload)),
    );

    group.bench_with_input(
        BenchmarkId::new("hash_hasher", WORKLOAD_LEN),
        &HashBuildHasher::default(),
        |b, state| b.iter(|| hash_all(state, &workload)),
    );

    group.bench_with_input(
        BenchmarkId::new("multiply_rotate", WORKLOAD_LEN),
        &SampleHashState::default(),
        |b, state| b.iter(|| hash_all(state, &workload)),
    );

    group.finish();
}

criterion_group!(benches, entrypoint);
criterion_main!(benches);
