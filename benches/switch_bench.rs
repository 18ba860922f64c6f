//! Benchmark for the switch-once combinators.
//!
//! Measures the dispatch overhead of OnceAndAfter and its closure forms
//! against a bare function call.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hofkit::switch::{OnceAndAfter, once_and_after, once_and_after_flag};
use std::hint::black_box;

fn first(value: u64) -> u64 {
    value.wrapping_mul(31)
}

fn second(value: u64) -> u64 {
    value.wrapping_add(17)
}

// =============================================================================
// Switched Dispatch Benchmarks
// =============================================================================

fn benchmark_switched_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("switched_dispatch");

    group.bench_function("bare_call", |bencher| {
        bencher.iter(|| second(black_box(42)));
    });

    group.bench_function("once_and_after_struct", |bencher| {
        let mut combinator = OnceAndAfter::new(first, second);
        combinator.call(0);
        bencher.iter(|| combinator.call(black_box(42)));
    });

    group.bench_function("once_and_after_closure", |bencher| {
        let mut combined = once_and_after(first, second);
        combined(0);
        bencher.iter(|| combined(black_box(42)));
    });

    group.bench_function("once_and_after_flag", |bencher| {
        let mut combined = once_and_after_flag(first, second);
        combined(0);
        bencher.iter(|| combined(black_box(42)));
    });

    group.finish();
}

// =============================================================================
// Fresh Combinator Benchmarks
// =============================================================================

fn benchmark_fresh_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fresh_sequence");

    for calls in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("calls", calls), &calls, |bencher, &calls| {
            bencher.iter(|| {
                let mut combinator = OnceAndAfter::new(first, second);
                let mut total = 0u64;
                for index in 0..calls {
                    total = total.wrapping_add(combinator.call(black_box(index)));
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_switched_dispatch, benchmark_fresh_sequence);
criterion_main!(benches);
