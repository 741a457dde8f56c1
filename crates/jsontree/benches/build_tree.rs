//! Benchmark – loading and walking a `jsontree::Document`
#![allow(missing_docs)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jsontree::{Document, NodeType};

/// A deterministic document with `records` objects, each holding a handful of
/// scalars and a short nested array.
fn make_json_payload(records: usize) -> String {
    let mut s = String::from("{\"records\":[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"name":"record-{i}","score":{score},"active":{active},"tags":["t{a}","t{b}"],"parent":null}}"#,
            score = i as f64 / 7.0,
            active = i % 3 == 0,
            a = i % 5,
            b = i % 11,
        )
        .unwrap();
    }
    s.push_str("]}");
    s
}

/// Visits every node the way a consumer would, touching the typed getters so
/// the walk cannot be optimised away.
fn walk(doc: &Document) -> usize {
    let mut acc = 0usize;
    for node in doc.nodes() {
        acc += match node.kind() {
            NodeType::Number => node.get_int().unsigned_abs() as usize,
            NodeType::String => node.get_str().len(),
            NodeType::Boolean => usize::from(node.get_bool()),
            NodeType::Array | NodeType::Object => node.get_count(),
            NodeType::Null => 1,
        };
        acc += node.path().len();
    }
    acc
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for &records in &[10usize, 1_000, 10_000] {
        let payload = make_json_payload(records);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("load_str", records), &payload, |b, p| {
            b.iter(|| black_box(jsontree::load_str(black_box(p)).unwrap()));
        });

        let value = jsontree::load_str(&payload).unwrap().into_value();
        group.bench_with_input(BenchmarkId::new("from_value", records), &value, |b, v| {
            b.iter(|| black_box(Document::from_value(black_box(v.clone()))));
        });

        let doc = jsontree::load_str(&payload).unwrap();
        group.bench_with_input(BenchmarkId::new("walk", records), &doc, |b, d| {
            b.iter(|| black_box(walk(black_box(d))));
        });

        group.bench_with_input(BenchmarkId::new("lookup", records), &doc, |b, d| {
            let last = format!("/records[{}]/tags[1]", records - 1);
            b.iter(|| black_box(d.find(black_box(&last)).unwrap()));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_build_tree }
criterion_main!(benches);
