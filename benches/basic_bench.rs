use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dense_bitset::{Bitset, Word, with_temporary_bitset, word_count};
use std::{collections::BTreeSet, hint::black_box};

fn sparse_storage(capacity: usize, step: usize) -> Vec<Word> {
    let mut words = vec![Word::EMPTY; word_count(capacity)];
    let mut bits = Bitset::new(&mut words[..]);
    for i in (0..capacity).step_by(step) {
        bits.insert(i);
    }
    words
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    group.bench_function("insert", |b| {
        let mut words = [Word::EMPTY; 8];
        let mut bits = Bitset::new(&mut words[..]);
        let mut i = 0;
        b.iter(|| {
            bits.insert(black_box(i % 512));
            i += 1;
        });
    });

    group.bench_function("contains", |b| {
        let words = sparse_storage(512, 2);
        let bits = Bitset::new(&words[..]);
        let mut i = 0;
        b.iter(|| {
            black_box(bits.contains(i % 512));
            i += 1;
        });
    });

    group.bench_function("update", |b| {
        let mut words = [Word::EMPTY; 8];
        let mut bits = Bitset::new(&mut words[..]);
        let mut i = 0usize;
        b.iter(|| {
            black_box(bits.update(i % 512, i.is_multiple_of(3)));
            i += 1;
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in &[64, 512, 4096] {
        let words = sparse_storage(*size, 3);

        group.bench_with_input(BenchmarkId::new("forward", size), &words, |b, words| {
            let bits = Bitset::new(&words[..]);
            b.iter(|| {
                for e in &bits {
                    black_box(e);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("reverse", size), &words, |b, words| {
            let bits = Bitset::new(&words[..]);
            b.iter(|| {
                for e in bits.iter().rev() {
                    black_box(e);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("index_after", size), &words, |b, words| {
            let bits = Bitset::new(&words[..]);
            b.iter(|| {
                let mut pos = bits.start_index();
                while pos != bits.end_index() {
                    pos = black_box(bits.index_after(pos));
                }
            });
        });

        // Compare with BTreeSet for reference
        let set: BTreeSet<usize> = (0..*size).step_by(3).collect();
        group.bench_with_input(BenchmarkId::new("btreeset", size), &set, |b, set| {
            b.iter(|| {
                for e in set {
                    black_box(e);
                }
            });
        });
    }

    group.finish();
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("offsets");

    for size in &[512, 4096] {
        let words = sparse_storage(*size, 5);

        group.bench_with_input(BenchmarkId::new("distance", size), &words, |b, words| {
            let bits = Bitset::new(&words[..]);
            b.iter(|| black_box(bits.distance(bits.start_index(), bits.end_index())));
        });

        group.bench_with_input(BenchmarkId::new("index_offset", size), &words, |b, words| {
            let bits = Bitset::new(&words[..]);
            let half = (bits.count() / 2) as isize;
            b.iter(|| black_box(bits.index_offset(bits.start_index(), half)));
        });

        group.bench_with_input(
            BenchmarkId::new("index_offset_limited", size),
            &words,
            |b, words| {
                let bits = Bitset::new(&words[..]);
                let half = (bits.count() / 2) as isize;
                let limit = bits.index_offset(bits.start_index(), half / 2);
                b.iter(|| black_box(bits.index_offset_limited(bits.start_index(), half, limit)));
            },
        );
    }

    group.finish();
}

fn bench_range_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_operations");

    for size in &[128, 1024, 8192] {
        let words = sparse_storage(*size, 2);
        let range = 10..*size - 10;

        group.bench_with_input(BenchmarkId::new("form_union", size), &words, |b, words| {
            b.iter(|| {
                let mut scratch = words.clone();
                Bitset::new(&mut scratch[..]).form_union(range.clone());
                black_box(scratch);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("form_intersection", size),
            &words,
            |b, words| {
                b.iter(|| {
                    let mut scratch = words.clone();
                    Bitset::new(&mut scratch[..]).form_intersection(range.clone());
                    black_box(scratch);
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("subtract", size), &words, |b, words| {
            b.iter(|| {
                let mut scratch = words.clone();
                Bitset::new(&mut scratch[..]).subtract(range.clone());
                black_box(scratch);
            });
        });

        group.bench_with_input(BenchmarkId::new("is_subset", size), &words, |b, words| {
            let bits = Bitset::new(&words[..]);
            b.iter(|| black_box(bits.is_subset(range.clone())));
        });
    }

    group.finish();
}

fn bench_temporary_storage(c: &mut Criterion) {
    let mut group = c.benchmark_group("temporary_storage");

    // Inline buffer
    group.bench_function("inline", |b| {
        b.iter(|| {
            black_box(with_temporary_bitset(2, |mut bits| {
                bits.form_union(3..100);
                bits.count()
            }))
        });
    });

    // Heap buffer
    group.bench_function("heap", |b| {
        b.iter(|| {
            black_box(with_temporary_bitset(64, |mut bits| {
                bits.form_union(3..4000);
                bits.count()
            }))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_membership,
    bench_iteration,
    bench_offsets,
    bench_range_operations,
    bench_temporary_storage,
);

criterion_main!(benches);
