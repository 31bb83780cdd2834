use num_traits::{Float, Zero};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Best known path to a vertex.
///
/// `weight` is the sum of edge weights along `path` from the source; `path`
/// lists the vertices visited in order, excluding both the source's
/// predecessor-less start and the destination itself; `explored` accumulates
/// every vertex ever reached en route to this record and is a superset of
/// the vertices in `path`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRecord<V, W>
where
    V: Eq + Hash,
{
    /// Cumulative weight from the source
    pub weight: W,

    /// Hop sequence from the source (source-exclusive)
    pub path: Vec<V>,

    /// Exploration history, grown by merge unions
    pub explored: HashSet<V>,
}

impl<V, W> PathRecord<V, W>
where
    V: Eq + Hash + Clone,
    W: Float + Zero + Debug + Copy,
{
    /// The record seeding the frontier at the source vertex
    pub fn seed() -> Self {
        PathRecord {
            weight: W::zero(),
            path: Vec::new(),
            explored: HashSet::new(),
        }
    }

    /// Extends this record across one outgoing edge of `origin`.
    ///
    /// The candidate's exploration history is exactly `{origin}`; history
    /// from earlier hops re-enters through merge unions, not here.
    pub fn extend(&self, origin: &V, edge_weight: W) -> Self {
        let mut path = self.path.clone();
        path.push(origin.clone());
        PathRecord {
            weight: self.weight + edge_weight,
            path,
            explored: std::iter::once(origin.clone()).collect(),
        }
    }

    /// Combines two competing records for the same vertex.
    ///
    /// The lighter record's weight and path win; on a tie the first operand
    /// wins. The exploration histories of BOTH operands are always unioned
    /// into the result, even when the winning path is unchanged — `explored`
    /// tracks everywhere the search has been, not the reported route. This
    /// reduction is associative, and order-insensitive except for the
    /// first-operand tie-break on equal weights.
    pub fn merge(mut self, mut other: Self) -> Self {
        if self.weight <= other.weight {
            self.explored.extend(other.explored);
            self
        } else {
            other.explored.extend(self.explored);
            other
        }
    }
}
