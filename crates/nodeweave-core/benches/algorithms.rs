mod support;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nodeweave_core::GraphStats;
use support::{TIERS, generate_cyclic, generate_dag};

fn bench_acyclic(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms.dag");

    for tier in TIERS {
        let graph = generate_dag(tier, 0xDA6_u64 + u64::from(tier.node_count));
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("components", tier.name), &graph, |b, g| {
            b.iter(|| black_box(g.find_components()));
        });

        group.bench_with_input(BenchmarkId::new("transitive_edges", tier.name), &graph, |b, g| {
            b.iter(|| black_box(g.find_transitive_edges()));
        });

        group.bench_with_input(BenchmarkId::new("ancestor_counts", tier.name), &graph, |b, g| {
            b.iter(|| black_box(g.find_number_of_node_ancestors()));
        });
    }

    group.finish();
}

fn bench_cyclic(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms.cyclic");

    for tier in TIERS {
        let graph = generate_cyclic(tier, 0xC1C_u64 + u64::from(tier.node_count));
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("scc", tier.name), &graph, |b, g| {
            b.iter(|| black_box(g.find_strongly_connected_components()));
        });

        group.bench_with_input(BenchmarkId::new("condensation", tier.name), &graph, |b, g| {
            b.iter(|| black_box(g.make_condensation_graph()));
        });

        group.bench_with_input(BenchmarkId::new("essential_edges", tier.name), &graph, |b, g| {
            b.iter(|| black_box(g.find_essential_edges()));
        });

        group.bench_with_input(BenchmarkId::new("stats", tier.name), &graph, |b, g| {
            b.iter(|| black_box(GraphStats::from_graph(g)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_acyclic, bench_cyclic);
criterion_main!(benches);
