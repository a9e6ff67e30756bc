//! Criterion benchmarks for route graph construction and ranking
//!
//! - Construction: aggregation stays near-linear in observed routes
//! - PageRank: full run to convergence on scale-free route networks

use airport_rank::{pagerank, rank_order, NodeId, PageRankConfig, RouteGraph, RouteGraphBuilder};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Generate scale-free route list (Barabási-Albert model approximation)
///
/// Repeated pairs are kept so construction exercises aggregation.
fn generate_route_network(num_nodes: usize, routes_per_node: usize) -> Vec<(NodeId, NodeId, f64)> {
    let mut routes = Vec::new();
    let mut rng_state = 12345_u64; // Simple LCG for reproducibility

    for node in 0..num_nodes {
        for _ in 0..routes_per_node {
            rng_state = rng_state.wrapping_mul(1103515245).wrapping_add(12345);
            // Square the draw to bias towards low indices (hubs)
            let draw = (rng_state >> 16) % num_nodes as u64;
            let target = (draw * draw / num_nodes as u64) as u32;

            if target != node as u32 {
                routes.push((NodeId(node as u32), NodeId(target), 1.0));
            }
        }
    }

    routes
}

/// Benchmark: builder aggregation + CSR freeze
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_graph_construction");

    for size in [100, 1_000, 10_000].iter() {
        let routes = generate_route_network(*size, 8);

        group.bench_with_input(BenchmarkId::new("builder", size), &routes, |b, routes| {
            b.iter(|| {
                let mut builder = RouteGraphBuilder::new();
                for i in 0..*size {
                    let code = format!("{i:05}");
                    builder.add_airport(code.clone(), code).unwrap();
                }
                for &(src, dst, w) in routes {
                    builder.add_route(src, dst, w).unwrap();
                }
                black_box(builder.build());
            });
        });
    }

    group.finish();
}

/// Benchmark: PageRank to convergence
fn bench_pagerank(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagerank");

    for size in [100, 1_000, 10_000].iter() {
        let routes = generate_route_network(*size, 8);
        let graph = RouteGraph::from_edge_list(*size, &routes).unwrap();
        let config = PageRankConfig::default();

        group.bench_with_input(BenchmarkId::new("to_convergence", size), &graph, |b, graph| {
            b.iter(|| {
                let result = pagerank(black_box(graph), &config).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark: report ordering
fn bench_rank_order(c: &mut Criterion) {
    let routes = generate_route_network(10_000, 8);
    let graph = RouteGraph::from_edge_list(10_000, &routes).unwrap();
    let ranks = pagerank(&graph, &PageRankConfig::default()).unwrap().ranks;

    c.bench_function("rank_order_10000", |b| {
        b.iter(|| black_box(rank_order(black_box(&ranks))));
    });
}

criterion_group!(benches, bench_construction, bench_pagerank, bench_rank_order);
criterion_main!(benches);
