use num_traits::{Float, ToPrimitive, Zero};
use serde::Serialize;
use std::fmt::Debug;

use crate::{Error, Result};

/// A weighted directed edge to a destination vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V, W> {
    /// Vertex the edge points at
    pub destination: V,

    /// Non-negative edge weight
    pub weight: W,
}

/// One row of the flattened adjacency relation: an origin vertex paired with
/// a single outgoing edge. The full graph store is a multi-map from origin to
/// edges, represented for partitioned processing as a flat collection of
/// these records keyed by origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyRecord<V, W> {
    /// Vertex the edge leaves from
    pub origin: V,

    /// The outgoing edge
    pub edge: Edge<V, W>,
}

impl<V, W> AdjacencyRecord<V, W> {
    /// Creates a record for a single directed edge
    pub fn new(origin: V, destination: V, weight: W) -> Self {
        AdjacencyRecord {
            origin,
            edge: Edge {
                destination,
                weight,
            },
        }
    }
}

/// Validates that no record carries a negative weight.
///
/// The settlement threshold is only sound for non-negative weights, so a
/// violation fails fast instead of producing a silently unsound result.
pub fn validate_non_negative<V, W>(records: &[AdjacencyRecord<V, W>]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    for record in records {
        if record.edge.weight < W::zero() {
            return Err(Error::NegativeWeight(
                record.edge.weight.to_f64().unwrap_or(f64::NAN),
            ));
        }
    }
    Ok(())
}
