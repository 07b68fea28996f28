// SPDX-License-Identifier: FSL-1.1
use crate::{error::BuildError, store::KeyValueStore, Error};
use log::info;
use std::{collections::HashMap, fmt, hash::Hash};

/// Builder type for constructing KeyValueStore instances
pub struct Builder<K, V> {
    capacity: usize,
    pairs: Vec<(K, V)>,
    reject_duplicates: bool,
}

impl<K, V> Builder<K, V> {
    /// create a new builder
    pub fn new() -> Self {
        Self {
            capacity: 0,
            pairs: Vec::default(),
            reject_duplicates: false,
        }
    }

    /// Reserves room for at least `capacity` pairs
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seeds the store with the given pairs, applied in order
    pub fn with_pairs(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    /// Fail the build if the seeded pairs repeat a key instead of letting the
    /// later pair overwrite the earlier one
    pub fn reject_duplicates(mut self) -> Self {
        self.reject_duplicates = true;
        self
    }
}

impl<K, V> Builder<K, V>
where
    K: Hash + Eq + fmt::Debug,
{
    /// Tries to build the [`KeyValueStore`] from the builder configuration
    pub fn try_build(self) -> Result<KeyValueStore<K, V>, Error> {
        let mut data = HashMap::with_capacity(self.capacity.max(self.pairs.len()));
        for (key, value) in self.pairs {
            if self.reject_duplicates && data.contains_key(&key) {
                return Err(BuildError::DuplicateKey(format!("{key:?}")).into());
            }
            data.insert(key, value);
        }
        info!("built key-value store with {} pairs", data.len());
        Ok(KeyValueStore { data })
    }
}

impl<K, V> Default for Builder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_overwrite() {
        let m = Builder::new()
            .with_pairs([("a", 1), ("a", 2)])
            .try_build()
            .unwrap();
        assert_eq!(Some(&2), m.get(&"a"));
        assert_eq!(1, m.len());
    }

    #[test]
    fn test_reject_duplicates() {
        let err = Builder::new()
            .with_pairs([("a", 1), ("b", 2), ("a", 3)])
            .reject_duplicates()
            .try_build()
            .unwrap_err();
        assert!(matches!(err, Error::Build(BuildError::DuplicateKey(ref k)) if k == "\"a\""));
    }

    #[test]
    fn test_capacity() {
        let m: KeyValueStore<u32, u32> = Builder::new().with_capacity(64).try_build().unwrap();
        assert!(m.is_empty());
        assert!(m.data.capacity() >= 64);
    }
}
