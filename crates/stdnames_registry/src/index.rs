//! Derived indexes from a name part to the names containing it.
//!
//! Buckets are persistent `im` sets, so handing out snapshots is O(1).

use im::{OrdMap, OrdSet};

/// A multimap from a name part (object, quantity, or operator) to the
/// full names that contain it.
///
/// A key is present exactly when at least one name maps to it; removing
/// the last name from a bucket deletes the bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameIndex {
    buckets: OrdMap<String, OrdSet<String>>,
}

impl NameIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the bucket for `key`, creating the bucket if needed.
    pub fn insert(&mut self, key: &str, name: &str) {
        if let Some(bucket) = self.buckets.get_mut(key) {
            bucket.insert(name.to_string());
        } else {
            self.buckets
                .insert(key.to_string(), OrdSet::unit(name.to_string()));
        }
    }

    /// Removes `name` from the bucket for `key`.
    ///
    /// The bucket is deleted once it is empty. Missing keys or names are
    /// ignored.
    pub fn remove(&mut self, key: &str, name: &str) {
        let now_empty = match self.buckets.get_mut(key) {
            Some(bucket) => {
                bucket.remove(name);
                bucket.is_empty()
            }
            None => return,
        };
        if now_empty {
            self.buckets.remove(key);
        }
    }

    /// Returns the names filed under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OrdSet<String>> {
        self.buckets.get(key)
    }

    /// Returns true if any name is filed under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets.contains_key(key)
    }

    /// Returns a snapshot of the distinct keys.
    #[must_use]
    pub fn keys(&self) -> OrdSet<String> {
        self.buckets.keys().cloned().collect()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the index has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over `(key, names)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OrdSet<String>)> {
        self.buckets.iter()
    }
}
