//! Benchmarks for rapid_positionrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rapid_positionrank::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Keyphrase extraction from scholarly documents identifies the words that best
describe a research paper. Graph based ranking models build a word graph from
the document and score every word with a random walk over that graph.

PositionRank incorporates the position of every word occurrence into a biased
random walk. Words that appear early in the document, such as words in the
title or the abstract, receive a larger share of the teleport probability.

Experiments on research paper datasets show that position information improves
keyphrase extraction over plain graph based ranking models. Unsupervised methods
need no annotated training data and transfer across domains, which makes them
attractive for digital libraries, search engines and document summarization.
"#;

fn stems_of(text: &str) -> (TokenizedText, Vec<String>) {
    let tokenized = HeuristicTokenizer::default()
        .tokenize(text, &PosTag::default_filter())
        .unwrap();
    let stemmer = PorterStemmer::new();
    let stems = tokenized.tokens.iter().map(|t| stemmer.normalize(t)).collect();
    (tokenized, stems)
}

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = HeuristicTokenizer::default();
    let filter = PosTag::default_filter();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT), &filter))
    });

    // Benchmark different document sizes
    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text), &filter))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let (_, stems) = stems_of(SAMPLE_TEXT);

    c.bench_function("graph_build", |b| {
        b.iter(|| GraphBuilder::new(6).build(black_box(&stems)))
    });

    let mut group = c.benchmark_group("graph_build_window");
    for window_size in [2, 6, 10].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_size),
            window_size,
            |b, &window_size| b.iter(|| GraphBuilder::new(window_size).build(black_box(&stems))),
        );
    }
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let (_, stems) = stems_of(SAMPLE_TEXT);
    let graph = GraphBuilder::new(6).build(&stems).unwrap();

    c.bench_function("position_pagerank", |b| {
        b.iter(|| PositionBiasedPageRank::new().run(black_box(&graph)))
    });

    // Benchmark with different damping factors
    let mut group = c.benchmark_group("pagerank_damping");
    for damping in [0.5, 0.85, 0.95].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(damping),
            damping,
            |b, &damping| {
                b.iter(|| {
                    PositionBiasedPageRank::new()
                        .with_damping(damping)
                        .run(black_box(&graph))
                })
            },
        );
    }
    group.finish();
}

fn benchmark_phrase_scoring(c: &mut Criterion) {
    let (tokenized, stems) = stems_of(SAMPLE_TEXT);
    let graph = GraphBuilder::new(6).build(&stems).unwrap();
    let pagerank = PositionBiasedPageRank::new().run(&graph);
    let stemmer = PorterStemmer::new();

    c.bench_function("score_and_rank", |b| {
        b.iter(|| {
            score_and_rank(
                black_box(&tokenized.tokens),
                black_box(&tokenized.phrases),
                &pagerank.scores,
                graph.word2idx(),
                &stemmer,
                10,
            )
        })
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let tokenizer = HeuristicTokenizer::default();
    let stemmer = PorterStemmer::new();
    let extractor = PositionRank::new();

    let mut group = c.benchmark_group("full_pipeline");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("position_rank", size), &text, |b, text| {
            b.iter(|| extractor.extract(black_box(text), &tokenizer, &stemmer))
        });
    }
    group.finish();

    // Parallel batch vs sequential loop
    let docs: Vec<String> = (0..32).map(|_| SAMPLE_TEXT.to_string()).collect();
    let mut group = c.benchmark_group("batch");
    group.bench_function("sequential", |b| {
        b.iter(|| {
            docs.iter()
                .map(|d| extractor.extract_with_info(black_box(d), &tokenizer, &stemmer))
                .collect::<Vec<_>>()
        })
    });
    group.bench_function("parallel", |b| {
        b.iter(|| extractor.extract_batch(black_box(&docs), &tokenizer, &stemmer))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_pagerank,
    benchmark_phrase_scoring,
    benchmark_full_pipeline,
);
criterion_main!(benches);
