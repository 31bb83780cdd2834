pub mod broadcast;
pub mod collection;

pub use broadcast::Broadcast;
pub use collection::PartitionedCollection;
