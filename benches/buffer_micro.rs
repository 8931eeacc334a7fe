//! Micro-benchmarks for the unordered buffer.
//!
//! Run with:
//! ```bash
//! cargo bench --bench buffer_micro
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use unordered_buffer::hash::BuildIdentityHasher;
use unordered_buffer::policy::Eviction;
use unordered_buffer::random::RngSource;
use unordered_buffer::UnorderedBuffer;

type Key = (u32, u32, u32);

/// Generate deterministic random triples for reproducible benchmarks.
fn random_keys(seed: u64, count: usize) -> Vec<Key> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                rng.random_range(2..10000u32),
                rng.random_range(2..10000u32),
                rng.random_range(2..10000u32),
            )
        })
        .collect()
}

/// Generate sequential triples (worst case for weak hash functions).
fn sequential_keys(start: u32, count: usize) -> Vec<Key> {
    (start..start + count as u32).map(|i| (i, i + 1, i + 2)).collect()
}

/// Zipf-like skewed stream: a few hot keys interleaved with a long cold tail.
fn skewed_keys(seed: u64, count: usize, hot: usize) -> Vec<Key> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let hot_set = random_keys(seed ^ 0xdead_beef, hot);
    (0..count)
        .map(|_| {
            if rng.random_bool(0.5) {
                hot_set[rng.random_range(0..hot)]
            } else {
                (
                    rng.random_range(0..u32::MAX),
                    rng.random_range(0..u32::MAX),
                    rng.random_range(0..u32::MAX),
                )
            }
        })
        .collect()
}

fn buffer(bits: u32) -> UnorderedBuffer<Key, u64> {
    UnorderedBuffer::with_hasher_and_source(1 << bits, Default::default(), RngSource::seeded(7))
}

// ============================================================================
// Benchmark: Random Insert
// ============================================================================

fn bench_random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer/insert");

    for bits in [10, 14, 16, 18] {
        let size = 1usize << bits;
        let keys = random_keys(42, size);

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("random", format!("2^{}", bits)), &keys, |b, keys| {
            b.iter_with_setup(
                || buffer(bits),
                |mut buf| {
                    for (i, key) in keys.iter().enumerate() {
                        buf.insert(*key, i as u64);
                    }
                    buf
                },
            );
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Lookup (mostly hits)
// ============================================================================

fn bench_lookup_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer/lookup_hit");

    for bits in [10, 14, 16, 18] {
        let size = 1usize << bits;
        // Fewer keys than buckets for a high hit rate
        let keys = random_keys(42, size / 4);

        let mut buf = buffer(bits);
        for (i, key) in keys.iter().enumerate() {
            buf.insert(*key, i as u64);
        }

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("random", format!("2^{}", bits)), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys.iter() {
                    if buf.get(key).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Sequential Keys (tests hash quality)
// ============================================================================

fn bench_sequential_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer/sequential");

    for bits in [10, 14, 16] {
        let size = 1usize << bits;
        let keys = sequential_keys(2, size);

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("insert", format!("2^{}", bits)), &keys, |b, keys| {
            b.iter_with_setup(
                || buffer(bits),
                |mut buf| {
                    for (i, key) in keys.iter().enumerate() {
                        buf.insert(*key, i as u64);
                    }
                    buf
                },
            );
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Collision Stress (probabilistic vs overwrite)
// ============================================================================

fn bench_collision_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer/collision_stress");

    for bits in [10, 12, 14] {
        let size = 1usize << bits;
        // 10x more keys than slots
        let keys = skewed_keys(42, size * 10, 16);

        for (name, eviction) in [("probabilistic", Eviction::default()), ("overwrite", Eviction::Overwrite)] {
            group.throughput(Throughput::Elements(keys.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, format!("2^{}", bits)), &keys, |b, keys| {
                b.iter_with_setup(
                    || buffer(bits).with_eviction(eviction),
                    |mut buf| {
                        for (i, key) in keys.iter().enumerate() {
                            buf.insert(*key, i as u64);
                        }
                        buf.stats().hits
                    },
                );
            });
        }
    }

    group.finish();
}

// ============================================================================
// Benchmark: Clear and Rehash
// ============================================================================

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer/clear");

    for bits in [10, 14, 18] {
        let size = 1usize << bits;
        let keys = random_keys(42, size);

        group.bench_with_input(BenchmarkId::new("full", format!("2^{}", bits)), &keys, |b, keys| {
            b.iter_with_setup(
                || {
                    let mut buf = buffer(bits);
                    for (i, key) in keys.iter().enumerate() {
                        buf.insert(*key, i as u64);
                    }
                    buf
                },
                |mut buf| {
                    buf.clear();
                    buf
                },
            );
        });
    }

    group.finish();
}

fn bench_rehash(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer/rehash");

    for bits in [10, 14, 16] {
        let size = 1usize << bits;
        let keys: Vec<u64> = (0..size as u64).collect();

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("double", format!("2^{}", bits)), &keys, |b, keys| {
            b.iter_with_setup(
                || {
                    let mut buf: UnorderedBuffer<u64, u64, BuildIdentityHasher> = UnorderedBuffer::with_hasher_and_source(
                        size,
                        BuildIdentityHasher::default(),
                        RngSource::seeded(7),
                    );
                    for &k in keys {
                        buf.insert(k, k);
                    }
                    buf
                },
                |mut buf| {
                    buf.rehash(2 * size);
                    buf
                },
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_random_insert,
    bench_lookup_hit,
    bench_sequential_insert,
    bench_collision_stress,
    bench_clear,
    bench_rehash,
);

criterion_main!(benches);
