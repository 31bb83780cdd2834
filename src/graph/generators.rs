use ordered_float::OrderedFloat;
use rand::Rng;

use crate::graph::AdjacencyRecord;

/// Generates a uniformly random directed graph as a flat adjacency relation,
/// with approximately `edge_factor * num_vertices` edges and weights drawn
/// from `[1.0, max_weight)`.
///
/// Takes the random generator as a parameter so tests can seed it.
pub fn random_graph<R: Rng>(
    num_vertices: usize,
    edge_factor: f64,
    max_weight: f64,
    rng: &mut R,
) -> Vec<AdjacencyRecord<usize, OrderedFloat<f64>>> {
    assert!(num_vertices > 1, "graph needs at least two vertices");
    assert!(max_weight > 1.0, "max_weight must exceed the minimum weight");

    let num_edges = (edge_factor * num_vertices as f64) as usize;
    let mut records = Vec::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
            records.push(AdjacencyRecord::new(u, v, weight));
        }
    }

    records
}

/// Generates a directed line graph `0 -> 1 -> ... -> n-1` with unit weights;
/// its diameter in edges is `n - 1`, which makes iteration-limit behavior
/// easy to pin down in tests.
pub fn line_graph(num_vertices: usize) -> Vec<AdjacencyRecord<usize, OrderedFloat<f64>>> {
    (0..num_vertices.saturating_sub(1))
        .map(|v| AdjacencyRecord::new(v, v + 1, OrderedFloat(1.0)))
        .collect()
}
