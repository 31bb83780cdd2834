use std::ops::Deref;
use std::sync::Arc;

/// A small read-only value published by the driver and visible to every
/// partition-level closure within a round.
///
/// The driver writes a broadcast once per round (the settled-vertex set) and
/// never mutates it afterwards, so cloning is a cheap reference-count bump
/// and concurrent reads from rayon workers need no locking.
#[derive(Debug, Clone)]
pub struct Broadcast<T> {
    value: Arc<T>,
}

impl<T> Broadcast<T> {
    /// Publishes a value, making it readable by all partitions
    pub fn new(value: T) -> Self {
        Broadcast {
            value: Arc::new(value),
        }
    }

    /// Returns a reference to the published value
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Broadcast<T> {
    /// Recovers the published value once the round's partition work is done.
    ///
    /// Associated function rather than a method so it never shadows a
    /// `into_inner` on the wrapped type.
    pub fn into_inner(broadcast: Self) -> T {
        Arc::try_unwrap(broadcast.value).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T> Deref for Broadcast<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
