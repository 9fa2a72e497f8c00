//! Criterion benchmarks for the word frequency pipeline.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordtally::analysis::analyzer::{Analyzer, WordAnalyzer};
use wordtally::engine::WordFrequencyEngine;
use wordtally::frequency::FrequencyTable;
use wordtally::ranking::Ranker;
use wordtally::report::ReportBuilder;

/// Generate a synthetic text with a skewed word distribution.
fn generate_text(word_count: usize) -> String {
    let words = [
        "The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog.", "It's",
        "a", "truth,", "universally", "acknowledged;", "that", "a", "single", "man!",
        "in", "possession", "of", "a", "good", "fortune", "must", "be", "in", "want",
    ];

    let mut text = String::with_capacity(word_count * 8);
    for i in 0..word_count {
        // Squaring the index skews frequencies toward the front of the list
        let index = (i * i + i / 3) % words.len();
        text.push_str(words[index]);
        text.push(if i % 12 == 11 { '\n' } else { ' ' });
    }
    text
}

fn bench_analysis(c: &mut Criterion) {
    let text = generate_text(50_000);
    let analyzer = WordAnalyzer::new();

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("word_analyzer", |b| {
        b.iter(|| analyzer.analyze(black_box(&text)).unwrap().count())
    });
    group.bench_function("count_frequencies", |b| {
        b.iter(|| FrequencyTable::from_tokens(analyzer.analyze(black_box(&text)).unwrap()))
    });
    group.finish();
}

fn bench_ranking_and_report(c: &mut Criterion) {
    let text = generate_text(50_000);
    let table = FrequencyTable::from_tokens(WordAnalyzer::new().analyze(&text).unwrap());
    let result = WordFrequencyEngine::default().analyze_text(&text).unwrap();

    c.bench_function("rank_top_10", |b| {
        b.iter(|| Ranker::default().rank(black_box(&table)))
    });
    c.bench_function("render_file_report", |b| {
        b.iter(|| ReportBuilder::new(black_box(&result)).render_file())
    });
}

criterion_group!(benches, bench_analysis, bench_ranking_and_report);
criterion_main!(benches);
