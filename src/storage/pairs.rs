// SPDX-License-Identifier: FSL-1.1

/// Trait to a key-value storage mechanism
pub trait Pairs<K, V> {
    /// get a value associated with the key
    fn get(&self, key: &K) -> Option<&V>;

    /// add a key-value pair to the storage, returns the previous value if the
    /// key already exists in the data structure
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// remove the pair with the given key, returns the removed value if the
    /// key was present. Removing an absent key is a no-op.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// all of the keys currently stored, in no particular order
    fn keys(&self) -> Vec<&K>;

    /// return the number of pairs in the storage
    fn len(&self) -> usize;

    /// return if the storage is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
