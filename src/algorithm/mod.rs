pub mod dijkstra;
pub mod engine;
pub mod record;
pub mod relax;
pub mod settle;

pub use engine::{BulkSssp, EngineConfig, SsspResult, Termination};
pub use record::PathRecord;
