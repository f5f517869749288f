use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use tickid::{
    Base32Ext, CounterSequencer, Generator, Layout, MonoId, MonotonicClock, RandomSequencer,
    ShortId, TaggedId, ThreadRandom, TickId, TickSequencer, TimeSource,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn unix_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks single-threaded generation through a fresh generator per
/// iteration.
fn bench_generator<ID, S, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> Generator<ID, S, T>,
) where
    ID: Layout,
    S: TickSequencer,
    T: TimeSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id());
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one shared generator under contention from several threads.
fn bench_generator_threaded<ID, S, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> Generator<ID, S, T>,
) where
    ID: Layout,
    S: TickSequencer + Send + Sync,
    T: TimeSource + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8] {
        let ids_per_thread = TOTAL_IDS / thread_count;
        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(
            format!("elems/{TOTAL_IDS}/threads/{thread_count}"),
            |b| {
                b.iter_custom(|iters| {
                    let mut total = core::time::Duration::ZERO;
                    for _ in 0..iters {
                        let generator = Arc::new(generator_factory());
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        let start = scope(|s| {
                            for _ in 0..thread_count {
                                let generator = Arc::clone(&generator);
                                let barrier = Arc::clone(&barrier);
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..ids_per_thread {
                                        black_box(generator.next_id());
                                    }
                                });
                            }
                            barrier.wait();
                            Instant::now()
                        });
                        total += start.elapsed();
                    }
                    total
                });
            },
        );
    }

    group.finish();
}

fn bench_codec<ID: Layout>(c: &mut Criterion, group_name: &str, sample: ID) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(black_box(sample).encode()));
    });

    group.bench_function("encode_to_buf", |b| {
        let mut buf = ID::buf();
        b.iter(|| {
            black_box(black_box(sample).encode_to_buf(&mut buf));
        });
    });

    let text = sample.encode();
    group.bench_function("decode", |b| {
        b.iter(|| black_box(ID::decode(black_box(text.as_str()))));
    });

    group.finish();
}

fn benchmark_mock_counter(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/counter/mono", || {
        Generator::<MonoId, _, _>::new(
            CounterSequencer::for_layout::<MonoId>(),
            FixedMockTime { millis: 1 },
        )
    });
}

fn benchmark_mock_random(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/random/tick", || {
        Generator::<TickId, _, _>::new(
            RandomSequencer::for_layout::<TickId>(ThreadRandom),
            FixedMockTime { millis: 1 },
        )
    });
}

fn benchmark_mock_contended_counter(c: &mut Criterion) {
    bench_generator_threaded(c, "mock/contended/counter/tagged", || {
        Generator::<TaggedId, _, _>::with_tag(
            CounterSequencer::for_layout::<TaggedId>(),
            FixedMockTime { millis: 1 },
            0xDEAD_BEEF,
        )
    });
}

fn benchmark_mock_contended_random(c: &mut Criterion) {
    bench_generator_threaded(c, "mock/contended/random/short", || {
        Generator::<ShortId, _, _>::new(
            RandomSequencer::for_layout::<ShortId>(ThreadRandom),
            FixedMockTime { millis: 1 },
        )
    });
}

fn benchmark_mono_clock_counter(c: &mut Criterion) {
    let clock = MonotonicClock::new();
    bench_generator(c, "mono/sequential/counter/mono", || {
        Generator::<MonoId, _, _>::new(CounterSequencer::for_layout::<MonoId>(), clock.clone())
    });
}

fn benchmark_codec(c: &mut Criterion) {
    bench_codec(c, "codec/short", ShortId::from_components(1, 0, 2));
    bench_codec(c, "codec/tick", TickId::from_components(1, 0, 2));
    bench_codec(c, "codec/tagged", TaggedId::from_components(1, 3, 2));
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_counter,
    benchmark_mock_random,
    benchmark_mock_contended_counter,
    benchmark_mock_contended_random,
    // Monotonic clock
    benchmark_mono_clock_counter,
    // Text form
    benchmark_codec,
);
criterion_main!(benches);
