//! Ordered key/value collection with unique keys.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Decoded query parameters in insertion order, keys unique.
///
/// Inserting an existing key replaces its value in place (last write wins)
/// and keeps the position of the first occurrence. Lookups and inserts go
/// through a key index, so decoding `n` parameters is linear in `n`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ParameterMapping {
    entries: Vec<(String, String)>,
    /// Key -> position in `entries`; rebuilt whenever `entries` is reordered.
    index: HashMap<String, usize>,
}

impl ParameterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces; returns the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Sorts entries by key, comparing bytes (not locale-aware).
    pub fn sort_by_key(&mut self) {
        self.entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
        for (pos, (k, _)) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(k) {
                *slot = pos;
            }
        }
    }
}

impl fmt::Debug for ParameterMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = ParameterMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParameterMapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for ParameterMapping {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serialized as a map, entries in iteration order.
impl Serialize for ParameterMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
