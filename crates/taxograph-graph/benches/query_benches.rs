//! Build / closure / LCA benchmarks over synthetic taxonomies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use taxograph_core::{
    ConceptId, RecordId, RelationshipRecord, RelationshipRow, RelationshipType,
};
use taxograph_graph::{ancestor_closure, build_graph, lowest_common_ancestor, MissingPolicy};

/// Generate rows for a `depth`-level taxonomy with `fanout` children
/// per node; ids encode tree position (root 1, children 11..1f, ...).
fn generate_rows(depth: u32, fanout: i64) -> Vec<RelationshipRow> {
    let effective_time = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
    let mut rows = Vec::new();
    let mut record_id = 0i64;
    let mut parents = vec![1i64];

    for _ in 0..depth {
        let mut next = Vec::new();
        for &parent in &parents {
            for slot in 0..fanout {
                let child = parent * 10 + slot + 1;
                record_id += 1;
                rows.push(RelationshipRow::from(RelationshipRecord {
                    id: RecordId(record_id),
                    source: ConceptId(child),
                    destination: ConceptId(parent),
                    relationship_type: RelationshipType::IS_A,
                    active: true,
                    effective_time,
                }));
                next.push(child);
            }
        }
        parents = next;
    }

    rows
}

/// Deepest leaf along the first-child spine.
fn first_leaf(depth: u32) -> ConceptId {
    let mut id = 1i64;
    for _ in 0..depth {
        id = id * 10 + 1;
    }
    ConceptId(id)
}

/// Deepest leaf along the last-child spine.
fn last_leaf(depth: u32, fanout: i64) -> ConceptId {
    let mut id = 1i64;
    for _ in 0..depth {
        id = id * 10 + fanout;
    }
    ConceptId(id)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");

    for &depth in &[4u32, 6, 8] {
        let rows = generate_rows(depth, 3);
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, _| {
            b.iter(|| build_graph(black_box(rows.clone()), Some(RelationshipType::IS_A)))
        });
    }

    group.finish();
}

fn bench_closure_and_lca(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure_lca");

    for &depth in &[4u32, 6, 8] {
        let (graph, _) = build_graph(generate_rows(depth, 3), Some(RelationshipType::IS_A));
        let targets = [first_leaf(depth), last_leaf(depth, 3)];

        group.bench_with_input(BenchmarkId::new("closure", depth), &depth, |b, _| {
            b.iter(|| {
                ancestor_closure(black_box(&graph), black_box(&targets), MissingPolicy::Error)
                    .unwrap()
            })
        });

        let closure = ancestor_closure(&graph, &targets, MissingPolicy::Error).unwrap();
        group.bench_with_input(BenchmarkId::new("lca_on_closure", depth), &depth, |b, _| {
            b.iter(|| {
                lowest_common_ancestor(black_box(&closure), black_box(&targets)).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("lca_on_full", depth), &depth, |b, _| {
            b.iter(|| lowest_common_ancestor(black_box(&graph), black_box(&targets)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_closure_and_lca);
criterion_main!(benches);
