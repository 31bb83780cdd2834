use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::record::PathRecord;
use crate::graph::Edge;
use crate::substrate::PartitionedCollection;

/// Extends every active path across every outgoing edge of its vertex.
///
/// Equi-joins the frontier with the graph store on the origin vertex and
/// re-keys each (record, edge) pair by the edge destination. This is a full
/// bulk relaxation of the whole frontier at once, not a single-vertex pop;
/// the output may hold several candidates per destination when a vertex has
/// fan-in from multiple predecessors. Pure: neither input is modified.
pub fn relax<V, W>(
    frontier: &PartitionedCollection<V, PathRecord<V, W>>,
    graph: &PartitionedCollection<V, Edge<V, W>>,
) -> PartitionedCollection<V, PathRecord<V, W>>
where
    V: Hash + Eq + Clone + Debug + Send + Sync,
    W: Float + Zero + Debug + Copy + Send + Sync,
{
    frontier.join(graph).map(|origin, (record, edge)| {
        (edge.destination.clone(), record.extend(origin, edge.weight))
    })
}
