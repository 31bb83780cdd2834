pub mod adjacency;
pub mod generators;
pub mod reader;

pub use adjacency::{validate_non_negative, AdjacencyRecord, Edge};
pub use reader::read_adjacency_list;
