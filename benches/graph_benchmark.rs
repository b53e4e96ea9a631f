use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ugraph::{bfs, dfs, Direction, ListGraph, MatrixGraph, UnweightedGraph};

fn ring_with_chords(n: u32) -> Vec<(u32, u32)> {
    let mut edges = Vec::with_capacity(2 * n as usize);
    for i in 0..n {
        edges.push((i, (i + 1) % n));
        edges.push((i, (i * 7 + 3) % n));
    }
    edges
}

fn bench_build(c: &mut Criterion) {
    let n = 256;
    let edges = ring_with_chords(n);

    c.bench_function("matrix_graph_build", |b| {
        b.iter(|| {
            let g = MatrixGraph::from_edges(n as usize, Direction::Directed, edges.iter().copied());
            black_box(g)
        });
    });

    c.bench_function("list_graph_build", |b| {
        b.iter(|| black_box(ListGraph::from_edges(Direction::Directed, edges.iter().copied())));
    });
}

fn bench_traversal(c: &mut Criterion) {
    let n = 256;
    let edges = ring_with_chords(n);
    let matrix = MatrixGraph::from_edges(n as usize, Direction::Directed, edges.iter().copied())
        .expect("capacity matches vertex count");
    let list = ListGraph::from_edges(Direction::Directed, edges.iter().copied())
        .expect("list graphs are unbounded");

    c.bench_function("matrix_graph_dfs", |b| b.iter(|| black_box(dfs(&matrix, 0))));
    c.bench_function("matrix_graph_bfs", |b| b.iter(|| black_box(bfs(&matrix, 0))));
    c.bench_function("list_graph_dfs", |b| b.iter(|| black_box(dfs(&list, 0))));
    c.bench_function("list_graph_bfs", |b| b.iter(|| black_box(bfs(&list, 0))));

    c.bench_function("list_graph_neighbors_of", |b| {
        b.iter(|| {
            for v in 0..n {
                black_box(list.neighbors_of(&v).ok());
            }
        });
    });
}

criterion_group!(benches, bench_build, bench_traversal);
criterion_main!(benches);
