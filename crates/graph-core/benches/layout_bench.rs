// File: crates/graph-core/benches/layout_bench.rs
// Summary: Criterion benchmark for the size -> scene layout pass.

use graph_core::Graph;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_layout(c: &mut Criterion) {
    let graph = Graph::new();
    let mut group = c.benchmark_group("layout");
    for &(w, h) in &[(800, 600), (1920, 1080), (120, 120)] {
        group.bench_function(format!("scene_{w}x{h}"), |b| {
            b.iter(|| black_box(graph.layout(black_box(w), black_box(h))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
