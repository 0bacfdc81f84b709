use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tallies::counters::local::Counter;
use tallies::counters::shared::SyncCounter;
use tallies::factory::counter_fn;

const NUM_THREADS: usize = 8;
const ITERATIONS: usize = 1_000_000;
const ITERATIONS_PER_THREAD: usize = 100_000;

fn bench_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_single_thread");
    let label = format!("{}iter", ITERATIONS);

    group.bench_function(BenchmarkId::new("Counter (cell)", &label), |b| {
        b.iter(|| {
            let counter = Counter::new();
            for _ in 0..ITERATIONS {
                black_box(counter.advance());
            }
            counter.value()
        })
    });

    group.bench_function(BenchmarkId::new("counter_fn (closure)", &label), |b| {
        b.iter(|| {
            let mut next = counter_fn();
            let mut last = 0;
            for _ in 0..ITERATIONS {
                last = black_box(next());
            }
            last
        })
    });

    group.bench_function(BenchmarkId::new("SyncCounter (atomic)", &label), |b| {
        b.iter(|| {
            let counter = SyncCounter::new();
            for _ in 0..ITERATIONS {
                black_box(counter.advance());
            }
            counter.value()
        })
    });

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_contended");
    let label = format!("{}threads x {}iter", NUM_THREADS, ITERATIONS_PER_THREAD);

    group.bench_function(BenchmarkId::new("SyncCounter (padded)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(SyncCounter::new());
            let handles: Vec<_> = (0..NUM_THREADS)
                .map(|_| {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || {
                        for _ in 0..ITERATIONS_PER_THREAD {
                            counter.advance();
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(counter.value())
        })
    });

    group.bench_function(BenchmarkId::new("AtomicI64 (bare)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(AtomicI64::new(0));
            let handles: Vec<_> = (0..NUM_THREADS)
                .map(|_| {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || {
                        for _ in 0..ITERATIONS_PER_THREAD {
                            counter.fetch_add(1, Ordering::Relaxed);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(counter.load(Ordering::Relaxed))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_thread, bench_contended);
criterion_main!(benches);
