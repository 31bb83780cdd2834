use rayon::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Default number of partitions for new collections
pub const DEFAULT_PARTITIONS: usize = 16;

/// Assigns a key to one of `partitions` shards with a deterministic hash
fn partition_index<K: Hash>(key: &K, partitions: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() as usize) % partitions
}

/// A key-sharded collection of key-value records supporting the bulk
/// operators of the engine: map, filter, equi-join, reduce-by-key and union.
///
/// Records with equal keys always land in the same partition, so `join` and
/// `reduce_by_key` run per partition with no cross-partition traffic. Every
/// operator is strict: it fully materializes its output before returning
/// (the rayon parallel collect is the synchronization barrier), which the
/// engine relies on when it derives the settlement threshold from *all* of a
/// round's candidates.
#[derive(Debug, Clone)]
pub struct PartitionedCollection<K, V> {
    partitions: Vec<Vec<(K, V)>>,
}

impl<K, V> PartitionedCollection<K, V>
where
    K: Hash + Eq + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Creates an empty collection with the given partition count
    pub fn empty(partitions: usize) -> Self {
        assert!(partitions > 0, "partition count must be positive");
        PartitionedCollection {
            partitions: vec![Vec::new(); partitions],
        }
    }

    /// Builds a collection by sharding the given records across partitions
    pub fn from_records<I>(records: I, partitions: usize) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut collection = PartitionedCollection::empty(partitions);
        for (key, value) in records {
            collection.insert(key, value);
        }
        collection
    }

    fn insert(&mut self, key: K, value: V) {
        let index = partition_index(&key, self.partitions.len());
        self.partitions[index].push((key, value));
    }

    /// Returns the number of partitions
    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Returns the total number of records across all partitions
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|partition| partition.len()).sum()
    }

    /// Returns true if the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(|partition| partition.is_empty())
    }

    /// Iterates over all materialized records, partition by partition
    pub fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.partitions.iter().flatten()
    }

    /// Iterates over all keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over all values
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Consumes the collection, yielding its records
    pub fn into_records(self) -> Vec<(K, V)> {
        self.partitions.into_iter().flatten().collect()
    }

    /// Applies `f` to every record, re-sharding the output by its new key
    pub fn map<K2, V2, F>(&self, f: F) -> PartitionedCollection<K2, V2>
    where
        K2: Hash + Eq + Clone + Send + Sync,
        V2: Clone + Send + Sync,
        F: Fn(&K, &V) -> (K2, V2) + Sync,
    {
        let mapped: Vec<Vec<(K2, V2)>> = self
            .partitions
            .par_iter()
            .map(|partition| partition.iter().map(|(key, value)| f(key, value)).collect())
            .collect();

        // Re-sharding runs sequentially so output order stays deterministic
        let mut result = PartitionedCollection::empty(self.partitions.len());
        for partition in mapped {
            for (key, value) in partition {
                result.insert(key, value);
            }
        }
        result
    }

    /// Keeps only the records matching the predicate; keys are unchanged so
    /// partition placement is preserved
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&K, &V) -> bool + Sync,
    {
        let partitions = self
            .partitions
            .par_iter()
            .map(|partition| {
                partition
                    .iter()
                    .filter(|(key, value)| predicate(key, value))
                    .cloned()
                    .collect()
            })
            .collect();
        PartitionedCollection { partitions }
    }

    /// Equi-joins two collections on their key, pairing every value of `self`
    /// with every value of `other` under the same key.
    ///
    /// Both collections must share a partition count; equal keys then sit in
    /// the same partition on both sides and the join is partition-local.
    pub fn join<V2>(&self, other: &PartitionedCollection<K, V2>) -> PartitionedCollection<K, (V, V2)>
    where
        V2: Clone + Send + Sync,
    {
        assert_eq!(
            self.partitions.len(),
            other.partitions.len(),
            "joined collections must share a partition count"
        );

        let partitions = self
            .partitions
            .par_iter()
            .zip(other.partitions.par_iter())
            .map(|(left, right)| {
                let mut table: HashMap<&K, Vec<&V2>> = HashMap::new();
                for (key, value) in right {
                    table.entry(key).or_default().push(value);
                }

                let mut joined = Vec::new();
                for (key, value) in left {
                    if let Some(matches) = table.get(key) {
                        for matched in matches {
                            joined.push((key.clone(), (value.clone(), (*matched).clone())));
                        }
                    }
                }
                joined
            })
            .collect();
        PartitionedCollection { partitions }
    }

    /// Concatenates two collections partition-wise
    pub fn union(mut self, other: Self) -> Self {
        assert_eq!(
            self.partitions.len(),
            other.partitions.len(),
            "unioned collections must share a partition count"
        );
        for (left, right) in self.partitions.iter_mut().zip(other.partitions) {
            left.extend(right);
        }
        self
    }

    /// Collapses every key to a single record by folding its values with `f`
    /// in arrival order (first-arrival record first, as the merge tie-break
    /// rule requires)
    pub fn reduce_by_key<F>(self, f: F) -> Self
    where
        F: Fn(V, V) -> V + Sync,
    {
        let partitions = self
            .partitions
            .into_par_iter()
            .map(|partition| {
                let mut index: HashMap<K, usize> = HashMap::new();
                let mut slots: Vec<(K, Option<V>)> = Vec::new();
                for (key, value) in partition {
                    if let Some(&slot) = index.get(&key) {
                        let merged = slots[slot].1.take().map(|existing| f(existing, value));
                        slots[slot].1 = merged;
                    } else {
                        index.insert(key.clone(), slots.len());
                        slots.push((key, Some(value)));
                    }
                }
                slots
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|value| (key, value)))
                    .collect()
            })
            .collect();
        PartitionedCollection { partitions }
    }
}
