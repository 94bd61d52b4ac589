//! Criterion benchmarks for Lectern.
//!
//! Covers the three hot paths of a query:
//! - Text analysis
//! - Document-scope IDF computation
//! - End-to-end question answering

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lectern::analysis::{Analyzer, EnglishAnalyzer};
use lectern::corpus::Corpus;
use lectern::document::Document;
use lectern::scoring::compute_idfs;
use lectern::search::{QaConfig, QuestionAnswerer};

const WORDS: &[&str] = &[
    "search", "engine", "text", "index", "query", "document", "term", "phrase", "vector",
    "relevance", "score", "analysis", "token", "sentence", "corpus", "language", "python",
    "network", "neural", "learning", "algorithm", "data", "structure", "memory", "storage",
];

/// Generate `count` documents of a few sentences each.
fn generate_corpus(count: usize) -> Corpus {
    let mut corpus = Corpus::new();
    for i in 0..count {
        let mut text = String::new();
        for s in 0..8 {
            for w in 0..12 {
                text.push_str(WORDS[(i * 7 + s * 3 + w * 5) % WORDS.len()]);
                text.push(' ');
            }
            text.push_str(if s % 3 == 0 { ".\n" } else { ". " });
        }
        corpus.insert(format!("doc{i:04}.txt"), text);
    }
    corpus
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = EnglishAnalyzer::new();
    let text = "What are the benefits of using neural networks for natural language \
                processing? Neural networks learn representations from data."
        .repeat(20);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("english_terms", |b| {
        b.iter(|| analyzer.terms(black_box(&text)).unwrap())
    });
    group.finish();
}

fn bench_idf(c: &mut Criterion) {
    let analyzer = EnglishAnalyzer::new();
    let corpus = generate_corpus(500);
    let documents: Vec<Document> = corpus
        .iter()
        .map(|entry| Document::new(entry.name.as_str(), analyzer.terms(&entry.text).unwrap()))
        .collect();

    let mut group = c.benchmark_group("idf");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("compute_idfs_500", |b| {
        b.iter(|| compute_idfs(black_box(&documents)).unwrap())
    });
    group.finish();
}

fn bench_answer(c: &mut Criterion) {
    let config = QaConfig {
        file_matches: 3,
        sentence_matches: 3,
        ..QaConfig::default()
    };
    let qa =
        QuestionAnswerer::new(generate_corpus(500), Arc::new(EnglishAnalyzer::new()), config)
            .unwrap();

    c.bench_function("answer_500_documents", |b| {
        b.iter(|| qa.answer(black_box("How do neural networks use memory?")).unwrap())
    });
}

criterion_group!(benches, bench_analysis, bench_idf, bench_answer);
criterion_main!(benches);
