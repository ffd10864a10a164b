use edgechain::{order_edges, Edge, EdgeChain};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

// Edges listed back to front with alternating orientation, so every step of the
// chain builder scans to the far end of the remaining edges.
fn reversed_path(n: u32) -> Vec<Edge<u32>> {
    (0..n)
        .rev()
        .map(|i| {
            if i % 2 == 0 {
                Edge::new(i, i + 1)
            } else {
                Edge::new(i + 1, i)
            }
        })
        .collect()
}

fn reversed_cycle(n: u32) -> Vec<Edge<u32>> {
    let mut edges = reversed_path(n - 1);
    edges.push(Edge::new(n - 1, 0));
    edges
}

#[library_benchmark]
#[bench::small(args = (16), setup = reversed_path)]
#[bench::large(args = (512), setup = reversed_path)]
fn order_path(edges: Vec<Edge<u32>>) -> EdgeChain<u32> {
    black_box(order_edges(&edges, Some(0)).unwrap())
}

#[library_benchmark]
#[bench::small(args = (16), setup = reversed_cycle)]
#[bench::large(args = (512), setup = reversed_cycle)]
fn order_cycle(edges: Vec<Edge<u32>>) -> EdgeChain<u32> {
    black_box(order_edges(&edges, None).unwrap())
}

library_benchmark_group!(
    name = ordering;
    benchmarks = order_path, order_cycle
);

main!(library_benchmark_groups = ordering);
