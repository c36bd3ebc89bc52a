use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memsearch::{Document, InMemoryEngine, Query, QueryBuilder, SearchEngine};
use tokio::runtime::Runtime;

const CORPUS_SIZE: usize = 1_000;

fn corpus() -> Vec<Document> {
    (0..CORPUS_SIZE)
        .map(|i| {
            Document::new(
                format!("doc-{i}"),
                format!("service report {i}"),
                "latency regression observed in the payment gateway after rollout",
            )
            .with_index(if i % 2 == 0 { "even" } else { "odd" })
            .with_type("report")
            .with_tags(vec!["ops", "payments"])
        })
        .collect()
}

fn bench_indexing(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let documents = corpus();

    c.bench_function("index_batch_1k", |b| {
        b.to_async(&rt).iter(|| async {
            let engine = InMemoryEngine::new();
            engine
                .index_batch(black_box(documents.clone()))
                .await
                .expect("index batch")
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let engine = InMemoryEngine::new();
    rt.block_on(async {
        engine.index_batch(corpus()).await.expect("seed corpus");
    });

    c.bench_function("search_ranked_1k", |b| {
        b.to_async(&rt).iter(|| async {
            let query = Query::new("latency regression");
            engine.search(black_box(&query)).await.expect("search")
        })
    });

    c.bench_function("search_faceted_scoped_1k", |b| {
        b.to_async(&rt).iter(|| async {
            let query = QueryBuilder::new("payment")
                .with_index("even")
                .with_facets(vec!["tags", "type"])
                .build();
            engine.search(black_box(&query)).await.expect("search")
        })
    });
}

criterion_group!(benches, bench_indexing, bench_search);
criterion_main!(benches);
