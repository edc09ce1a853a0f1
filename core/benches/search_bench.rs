use criterion::{criterion_group, criterion_main, Criterion};
use docsearch_core::{InvertedIndex, Ranker};

fn corpus(doc_cnt: usize) -> Vec<String> {
    (0..doc_cnt)
        .map(|i| format!("doc{} the quick brown fox {} jumps over the lazy dog w{}", i % 97, i % 13, i % 1000))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let docs = corpus(10_000);
    c.bench_function("build_10k", |b| b.iter(|| InvertedIndex::build(&docs)));
}

fn bench_answer(c: &mut Criterion) {
    let index = InvertedIndex::build(corpus(50_000));
    let mut ranker = Ranker::new();
    c.bench_function("answer_50k", |b| b.iter(|| ranker.answer(&index, "the fox w42 doc7 unknown")));
}

criterion_group!(benches, bench_build, bench_answer);
criterion_main!(benches);
