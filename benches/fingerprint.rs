//! Benchmarks for fingerprinting and distance computation.
//!
//! Fingerprinting cost is linear in the number of characters (one SHA-256
//! per bigram plus 256 ballot updates); distance is constant time.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use simprint::{fingerprint, hamming_distance, Fingerprint};

// === Generators ===

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "世界", "👋", "hello",
    "rust", "ballot", "shingle", "naïve", "café",
];

fn random_text(n_words: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_words)
        .map(|_| *WORDS.choose(&mut rng).unwrap_or(&"the"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_fingerprints(n: usize, seed: u64) -> Vec<Fingerprint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut bytes = [0u8; 32];
            rng.fill(&mut bytes);
            Fingerprint::from_bytes(bytes)
        })
        .collect()
}

// === Benchmarks ===

fn bench_fingerprint_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    for n_words in [8, 64, 512, 4096].iter() {
        let text = random_text(*n_words, 42);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n_words), &text, |bench, text| {
            bench.iter(|| fingerprint(black_box(text)));
        });
    }

    group.finish();
}

fn bench_hamming(c: &mut Criterion) {
    let fps = random_fingerprints(2, 7);
    let (a, b) = (fps[0], fps[1]);

    c.bench_function("hamming_typed", |bench| {
        bench.iter(|| black_box(&a).hamming_distance(black_box(&b)));
    });

    c.bench_function("hamming_bytes", |bench| {
        bench.iter(|| hamming_distance(black_box(a.bytes()), black_box(b.bytes())));
    });
}

fn bench_batch_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_hamming");

    for n in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*n as u64));

        let fps = random_fingerprints(*n + 1, 13);
        let query = fps[0];
        let candidates = &fps[1..];

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |bench, _| {
            bench.iter(|| {
                candidates
                    .iter()
                    .map(|c| query.hamming_distance(black_box(c)))
                    .min()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fingerprint_lengths,
    bench_hamming,
    bench_batch_hamming,
);
criterion_main!(benches);
