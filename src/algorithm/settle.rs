use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::record::PathRecord;
use crate::substrate::PartitionedCollection;

/// Minimum candidate weight produced by a round's relaxation, or `None` when
/// the round produced no candidates at all.
///
/// `None` plays the role of +infinity: with nothing left to extend, every
/// remaining active vertex settles immediately. The candidates collection is
/// fully materialized before this runs; a threshold derived from partial
/// results would settle vertices unsoundly.
pub fn round_threshold<V, W>(
    candidates: &PartitionedCollection<V, PathRecord<V, W>>,
) -> Option<W>
where
    V: Hash + Eq + Clone + Send + Sync,
    W: Float + Zero + Ord + Debug + Copy + Send + Sync,
{
    candidates.values().map(|record| record.weight).min()
}

/// Vertices of the pre-merge frontier whose best known weight is proven
/// optimal by this round's threshold.
///
/// With non-negative edge weights, any path reaching a vertex through at
/// least one more relaxation weighs at least the threshold. A frontier
/// weight strictly below it therefore cannot improve in any later round —
/// the bulk analogue of Dijkstra's pop-the-minimum, settling a whole batch
/// per round.
pub fn newly_settled<V, W>(
    frontier: &PartitionedCollection<V, PathRecord<V, W>>,
    threshold: Option<W>,
) -> HashSet<V>
where
    V: Hash + Eq + Clone + Send + Sync,
    W: Float + Zero + Ord + Debug + Copy + Send + Sync,
{
    frontier
        .iter()
        .filter(|(_, record)| match threshold {
            Some(bound) => record.weight < bound,
            None => true,
        })
        .map(|(vertex, _)| vertex.clone())
        .collect()
}
