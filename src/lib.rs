//! Bulk-SSSP - Bulk-Synchronous Single-Source Shortest Paths
//!
//! This library computes shortest paths from a source vertex to all reachable
//! vertices of an edge-weighted directed graph using a bulk-synchronous
//! frontier-relaxation algorithm: every active vertex is relaxed against every
//! outgoing edge in lockstep rounds, and a per-round settlement threshold
//! proves whole batches of vertices optimal at once, reproducing Dijkstra's
//! guarantee without a global priority queue.
//!
//! The engine runs over a partitioned key-value substrate (hash-sharded,
//! rayon-parallel) so the same algorithm applies unchanged whether the
//! partitions live on one machine or many. Edge weights must be non-negative;
//! that invariant is what makes the settlement threshold sound.

pub mod algorithm;
pub mod graph;
pub mod substrate;

pub use algorithm::{
    dijkstra::sequential_shortest_paths, BulkSssp, EngineConfig, PathRecord, SsspResult,
    Termination,
};
pub use graph::{AdjacencyRecord, Edge};
pub use substrate::{Broadcast, PartitionedCollection};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed adjacency line {line}: {reason}")]
    FormatError { line: usize, reason: String },

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight {0} is not representable by the weight type")]
    WeightOutOfRange(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("I/O error reading graph: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
