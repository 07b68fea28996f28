// SPDX-License-Identifier: FSL-1.1
use crate::{dump, storage::Pairs, store::Builder, Error};
use log::{debug, trace};
use std::{collections::HashMap, fmt, hash::Hash, io::Write};

/// A key-value store backed by a hash table. Every key maps to at most one
/// value and the order of the keys is unspecified.
#[derive(Clone, Debug)]
pub struct KeyValueStore<K, V> {
    pub(crate) data: HashMap<K, V>,
}

impl<K, V> KeyValueStore<K, V>
where
    K: Hash + Eq,
{
    /// create a new, empty store
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// create an empty store with room for at least `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }

    /// get a builder for configuring a store
    pub fn builder() -> Builder<K, V> {
        Builder::new()
    }

    /// insert or overwrite the value for `key`, returning the previous value
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let prev = self.data.insert(key, value);
        trace!("put (overwrite: {}) -> len {}", prev.is_some(), self.data.len());
        prev
    }

    /// get the value associated with `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// true if a value is associated with `key`
    pub fn contains_key(&self, key: &K) -> bool {
        self.data.contains_key(key)
    }

    /// remove the pair for `key`; an absent key leaves the store unchanged
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.data.remove(key);
        if removed.is_none() {
            debug!("remove of absent key");
        }
        removed
    }

    /// all keys in the store, in no particular order
    pub fn keys(&self) -> Vec<&K> {
        self.data.keys().collect()
    }

    /// the number of pairs in the store
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// true if the store holds no pairs
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K, V> KeyValueStore<K, V>
where
    K: Hash + Eq + fmt::Display,
    V: fmt::Display,
{
    /// Write every pair as a `key value` line
    pub fn write_all<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), Error> {
        dump::write_lines(w, self.data.iter().map(|(k, v)| format!("{k} {v}")))
    }

    /// Print every pair as a `key value` line to stdout
    pub fn print_all(&self) -> Result<(), Error> {
        dump::print_lines(self.data.iter().map(|(k, v)| format!("{k} {v}")))
    }
}

impl<K, V> PartialEq for KeyValueStore<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K, V> Eq for KeyValueStore<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

impl<K, V> Default for KeyValueStore<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for KeyValueStore<K, V>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for KeyValueStore<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K, V> Pairs<K, V> for KeyValueStore<K, V>
where
    K: Hash + Eq,
{
    fn get(&self, key: &K) -> Option<&V> {
        KeyValueStore::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        KeyValueStore::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        KeyValueStore::remove(self, key)
    }

    fn keys(&self) -> Vec<&K> {
        KeyValueStore::keys(self)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
