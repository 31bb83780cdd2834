use num_traits::{Float, Zero};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::AdjacencyRecord;

/// Classic sequential Dijkstra over the same flat edge relation the bulk
/// engine consumes.
///
/// Single-machine baseline: returns the shortest-path weight for every
/// reachable vertex (the source included, at zero). Tests cross-check the
/// engine's settled weights against it.
pub fn sequential_shortest_paths<V, W>(
    records: &[AdjacencyRecord<V, W>],
    source: &V,
) -> HashMap<V, W>
where
    V: Hash + Eq + Ord + Clone + Debug,
    W: Float + Zero + Ord + Debug + Copy,
{
    let mut adjacency: HashMap<V, Vec<(V, W)>> = HashMap::new();
    for record in records {
        adjacency
            .entry(record.origin.clone())
            .or_default()
            .push((record.edge.destination.clone(), record.edge.weight));
    }

    let mut distances: HashMap<V, W> = HashMap::new();
    distances.insert(source.clone(), W::zero());

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((W::zero(), source.clone())));

    while let Some(Reverse((distance, vertex))) = queue.pop() {
        // Skip stale queue entries for vertices already improved
        if let Some(best) = distances.get(&vertex) {
            if *best < distance {
                continue;
            }
        }

        if let Some(edges) = adjacency.get(&vertex) {
            for (destination, weight) in edges {
                let next = distance + *weight;
                let improved = match distances.get(destination) {
                    None => true,
                    Some(current) => next < *current,
                };
                if improved {
                    distances.insert(destination.clone(), next);
                    queue.push(Reverse((next, destination.clone())));
                }
            }
        }
    }

    distances
}
