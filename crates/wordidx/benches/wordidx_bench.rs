// Criterion benchmarks for wordidx.
//
// Uses a synthetic word list so no dictionary file is needed. Set
// WORDIDX_DICT_PATH to a real word list to also benchmark loading it.
//
// Run:
//   cargo bench -p wordidx
//   WORDIDX_DICT_PATH=/path/to/large cargo bench -p wordidx

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wordidx::{IndexConfig, WordIndex};

// ---------------------------------------------------------------------------
// Word list generation
// ---------------------------------------------------------------------------

/// Deterministic pseudo-words: "aaaa", "baaa", ... spread across buckets.
fn synthetic_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|mut n| {
            let mut word = String::new();
            loop {
                word.push(char::from(b'a' + (n % 26) as u8));
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            while word.len() < 4 {
                word.push('a');
            }
            word
        })
        .collect()
}

fn word_list_bytes(words: &[String]) -> Vec<u8> {
    words.join("\n").into_bytes()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_load(c: &mut Criterion) {
    let data = word_list_bytes(&synthetic_words(100_000));

    c.bench_function("load_100k_words", |b| {
        b.iter(|| {
            let mut index = WordIndex::new();
            index.load(black_box(data.as_slice())).expect("load");
            black_box(index.size())
        });
    });

    c.bench_function("load_100k_words_16k_buckets", |b| {
        let config = IndexConfig::default().with_buckets(16_384);
        b.iter(|| {
            let mut index = WordIndex::with_config(config).expect("config");
            index.load(black_box(data.as_slice())).expect("load");
            black_box(index.size())
        });
    });
}

fn bench_check(c: &mut Criterion) {
    let words = synthetic_words(100_000);
    let mut index = WordIndex::new();
    index.load(word_list_bytes(&words).as_slice()).expect("load");
    let hits: Vec<String> = words.iter().step_by(97).map(|w| w.to_uppercase()).collect();

    c.bench_function("check_hits", |b| {
        b.iter(|| {
            for word in &hits {
                black_box(index.check(word));
            }
        });
    });

    c.bench_function("check_misses", |b| {
        b.iter(|| {
            for word in &hits {
                black_box(index.check(format!("{word}zz")));
            }
        });
    });
}

fn bench_real_dictionary(c: &mut Criterion) {
    let Ok(path) = std::env::var("WORDIDX_DICT_PATH") else {
        eprintln!("[bench_real_dictionary] WORDIDX_DICT_PATH not set, skipping");
        c.bench_function("load_dictionary (skipped)", |b| b.iter(|| {}));
        return;
    };

    c.bench_function("load_dictionary", |b| {
        b.iter(|| {
            let mut index = WordIndex::new();
            index.load_path(&path).expect("load dictionary");
            black_box(index.size())
        });
    });
}

criterion_group!(benches, bench_load, bench_check, bench_real_dictionary);
criterion_main!(benches);
