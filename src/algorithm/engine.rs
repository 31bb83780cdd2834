use log::info;
use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::record::PathRecord;
use crate::algorithm::relax::relax;
use crate::algorithm::settle::{newly_settled, round_threshold};
use crate::graph::{validate_non_negative, AdjacencyRecord, Edge};
use crate::substrate::collection::DEFAULT_PARTITIONS;
use crate::substrate::{Broadcast, PartitionedCollection};
use crate::{Error, Result};

/// Default bound on the number of relaxation rounds
pub const DEFAULT_ITERATION_LIMIT: usize = 30;

/// Tunable parameters of the engine
#[derive(Debug, Clone)]
pub struct EngineConfig<V> {
    /// Maximum number of rounds before the run is cut off
    pub iteration_limit: usize,

    /// Optional vertex whose settlement ends the run early
    pub target: Option<V>,

    /// Partition count for the frontier and graph-store collections
    pub partitions: usize,
}

impl<V> EngineConfig<V> {
    /// Creates a configuration with the default limits
    pub fn new() -> Self {
        EngineConfig {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            target: None,
            partitions: DEFAULT_PARTITIONS,
        }
    }

    /// Sets the round budget
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> Self {
        self.iteration_limit = iteration_limit;
        self
    }

    /// Sets a target vertex; the run stops as soon as it settles
    pub fn with_target(mut self, target: V) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the partition count
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }
}

impl<V> Default for EngineConfig<V> {
    fn default() -> Self {
        EngineConfig::new()
    }
}

/// Terminal states of the driver loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The frontier drained: every reachable vertex settled and the graph
    /// store holds no further relaxable edge
    Converged,

    /// The round budget ran out before the frontier drained; the result is
    /// partial but every settled record is still optimal
    IterationLimitReached,

    /// The configured target vertex settled; remaining work was skipped
    TargetSettled,
}

/// Outcome of an engine run
#[derive(Debug, Clone)]
pub struct SsspResult<V, W>
where
    V: Eq + Hash,
{
    /// Proven-optimal path per settled vertex
    pub settled: HashMap<V, PathRecord<V, W>>,

    /// Best known (unproven) records still active at termination
    pub unsettled: HashMap<V, PathRecord<V, W>>,

    /// Why the run stopped
    pub termination: Termination,

    /// Number of rounds executed
    pub rounds: usize,

    /// Source vertex the run started from
    pub source: V,
}

/// Round-to-round state, threaded explicitly through the driver loop so each
/// round is a pure function of the previous one
struct RoundState<V, W>
where
    V: Eq + Hash,
{
    frontier: PartitionedCollection<V, PathRecord<V, W>>,
    graph: PartitionedCollection<V, Edge<V, W>>,
    settled_set: HashSet<V>,
    settled_paths: HashMap<V, PathRecord<V, W>>,
}

/// Bulk-synchronous shortest-path engine.
///
/// Each round relaxes the whole frontier against the graph store, derives
/// the settlement threshold from the materialized candidates, migrates the
/// proven-optimal vertices out of the frontier, merges the remaining
/// competitors per vertex and prunes the graph store of edges touching
/// settled vertices.
#[derive(Debug, Clone, Default)]
pub struct BulkSssp<V> {
    config: EngineConfig<V>,
}

impl<V> BulkSssp<V>
where
    V: Hash + Eq + Clone + Debug + Send + Sync,
{
    /// Creates an engine with the default configuration
    pub fn new() -> Self {
        BulkSssp {
            config: EngineConfig::new(),
        }
    }

    /// Creates an engine with an explicit configuration
    pub fn with_config(config: EngineConfig<V>) -> Self {
        BulkSssp { config }
    }

    /// Computes shortest paths from `source` over the given edge relation.
    ///
    /// Fails fast on negative weights (they break the settlement argument)
    /// and on a source that appears nowhere in the relation. Runs until the
    /// frontier drains, the iteration limit is hit, or the configured target
    /// settles, and returns the settled paths along with whatever remained
    /// unproven.
    pub fn run<W>(
        &self,
        records: Vec<AdjacencyRecord<V, W>>,
        source: V,
    ) -> Result<SsspResult<V, W>>
    where
        W: Float + Zero + Ord + Debug + Copy + Send + Sync,
    {
        validate_non_negative(&records)?;
        let known_vertex = records
            .iter()
            .any(|record| record.origin == source || record.edge.destination == source);
        if !known_vertex {
            return Err(Error::SourceNotFound);
        }

        let partitions = self.config.partitions;
        let graph = PartitionedCollection::from_records(
            records.into_iter().map(|record| (record.origin, record.edge)),
            partitions,
        );
        let frontier = PartitionedCollection::from_records(
            std::iter::once((source.clone(), PathRecord::seed())),
            partitions,
        );

        let mut state = RoundState {
            frontier,
            graph,
            settled_set: HashSet::new(),
            settled_paths: HashMap::new(),
        };
        let mut rounds = 0;

        let termination = loop {
            if rounds >= self.config.iteration_limit {
                break Termination::IterationLimitReached;
            }

            state = run_round(rounds, state);
            rounds += 1;

            if state.frontier.is_empty() {
                break Termination::Converged;
            }
            if let Some(target) = &self.config.target {
                if state.settled_set.contains(target) {
                    break Termination::TargetSettled;
                }
            }
        };

        info!(
            "terminated after {} rounds: {:?}, {} settled, {} unsettled",
            rounds,
            termination,
            state.settled_paths.len(),
            state.frontier.len()
        );

        Ok(SsspResult {
            settled: state.settled_paths,
            unsettled: state.frontier.into_records().into_iter().collect(),
            termination,
            rounds,
            source,
        })
    }
}

/// Executes one bulk-synchronous round: relax, settle, merge, prune.
///
/// The threshold and the settled batch are computed from the pre-merge
/// frontier; the merge then folds this round's candidates into the surviving
/// frontier entries. Every collection an operator returns is fully
/// materialized, so the threshold always sees the complete candidate set.
fn run_round<V, W>(round: usize, state: RoundState<V, W>) -> RoundState<V, W>
where
    V: Hash + Eq + Clone + Debug + Send + Sync,
    W: Float + Zero + Ord + Debug + Copy + Send + Sync,
{
    let RoundState {
        frontier,
        graph,
        mut settled_set,
        mut settled_paths,
    } = state;

    info!(
        "round {}: graph store {} records, frontier {} active",
        round,
        graph.len(),
        frontier.len()
    );

    let candidates = relax(&frontier, &graph);
    let threshold = round_threshold(&candidates);
    let settled_now = newly_settled(&frontier, threshold);
    settled_set.extend(settled_now.iter().cloned());
    let dropped = Broadcast::new(settled_set);

    info!(
        "round {}: {} candidates, threshold {:?}, settling {} vertices",
        round,
        candidates.len(),
        threshold,
        settled_now.len()
    );

    // Merge this round's candidates into the frontier, then split the merged
    // collection into settled migrations and the next round's frontier. The
    // settled records carry the pre-merge weight and path (settlement is
    // strict, so no candidate can win the merge) plus the unioned history.
    let merged = candidates.union(frontier).reduce_by_key(PathRecord::merge);
    for (vertex, record) in merged.filter(|vertex, _| dropped.contains(vertex)).into_records() {
        settled_paths.entry(vertex).or_insert(record);
    }
    let frontier = merged.filter(|vertex, _| !dropped.contains(vertex));

    // Edges into or out of settled vertices can no longer affect an
    // unsettled path; dropping them shrinks the next join
    let graph = graph.filter(|origin, edge| {
        !dropped.contains(origin) && !dropped.contains(&edge.destination)
    });

    RoundState {
        frontier,
        graph,
        settled_set: Broadcast::into_inner(dropped),
        settled_paths,
    }
}
