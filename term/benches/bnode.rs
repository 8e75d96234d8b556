//! This benchmark measures
//! * how fast a factory mints fresh blank nodes,
//! * how fast term identifiers are computed and parsed back.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rdfjs_term::{data_factory, term_to_id, Term};

fn fresh_blank_nodes(c: &mut Criterion) {
    let f = data_factory();
    c.bench_function("fresh blank node", |b| {
        b.iter(|| black_box(f.blank_node(None)));
    });
    c.bench_function("blank node with fragment label", |b| {
        b.iter(|| black_box(f.blank_node(Some("http://example.org/#x"))));
    });
}

fn ids(c: &mut Criterion) {
    let f = data_factory();
    let s = f.named_node("http://example.org/alice");
    let p = f.named_node("http://xmlns.com/foaf/0.1/name");
    let terms: Vec<Term> = vec![
        s.clone().into(),
        f.blank_node(None).into(),
        f.literal_lang("Alice", "en").into(),
        f.quad(s, p, f.literal("Alice"), None).into(),
    ];
    c.bench_function("term_to_id", |b| {
        b.iter(|| {
            for t in &terms {
                black_box(term_to_id(t));
            }
        });
    });
    let ids: Vec<String> = terms.iter().map(term_to_id).collect();
    c.bench_function("term_from_id", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(f.from_id(id).is_ok());
            }
        });
    });
}

criterion_group!(benches, fresh_blank_nodes, ids);
criterion_main!(benches);
