use criterion::{Criterion, criterion_group, criterion_main};
use wikiweave_engine::{Parser, config::ParserConfig, parsing::parse_document};
mod common;

fn bench_parse_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let parser = Parser::new(ParserConfig::default());
    let content = common::generate_wiki_content(100);
    group.bench_function("parse_and_render", |b| {
        b.iter(|| {
            let html = parser.parse(std::hint::black_box(&content));
            std::hint::black_box(html);
        });
    });

    let config = ParserConfig::default();
    group.bench_function("parse_only", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content), &config);
            std::hint::black_box(doc);
        });
    });

    let inline = common::generate_inline_heavy(500);
    group.bench_function("inline_heavy", |b| {
        b.iter(|| {
            let html = parser.parse(std::hint::black_box(&inline));
            std::hint::black_box(html);
        });
    });

    let unmatched = common::generate_unmatched_openers(200);
    group.bench_function("unmatched_openers", |b| {
        b.iter(|| {
            let html = parser.parse(std::hint::black_box(&unmatched));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_and_render);
criterion_main!(benches);
