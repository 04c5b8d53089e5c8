use std::hash::Hash;

use indexmap::IndexMap;

/// In-memory ordered record store, keyed by id.
///
/// Backing is an `IndexMap` so list responses preserve seed/creation order
/// and removal shifts the remainder without reordering. The store itself is
/// not synchronized; callers wrap it in a lock and hold the write guard for
/// the full read-modify-write of create/update/delete.
#[derive(Debug)]
pub struct MemoryStore<K, V> {
    records: IndexMap<K, V>,
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<K, V> MemoryStore<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<V> {
        self.records.values().cloned().collect()
    }

    pub fn get(&self, id: &K) -> Option<V> {
        self.records.get(id).cloned()
    }

    /// Appends a record. A duplicate id replaces in place, but id allocation
    /// in the handlers never produces one.
    pub fn insert(&mut self, id: K, record: V) {
        self.records.insert(id, record);
    }

    /// Replaces the record at `id`, keeping its position. Returns the new
    /// record, or `None` if the id is absent.
    pub fn update(&mut self, id: &K, record: V) -> Option<V> {
        let slot = self.records.get_mut(id)?;
        *slot = record.clone();
        Some(record)
    }

    /// Removes the record at `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &K) -> Option<V> {
        self.records.shift_remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
