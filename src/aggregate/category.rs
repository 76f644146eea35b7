//! Occurrence counts keyed by a categorical field

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Category → count, ordered by first occurrence.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(String, u64)>,
}

impl CategoryCounts {
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, count)| (k.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.values().sum()
    }

    /// Share of `key` in percent; 0 for unknown keys or an empty map.
    pub fn percent_of(&self, key: &str) -> f64 {
        super::rates::percent(self.get(key).unwrap_or(0), self.total())
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Count records by `key`, keeping first-occurrence order.
pub fn count_by<'a, T, K: AsRef<str>>(
    records: &'a [T],
    key: impl Fn(&'a T) -> K,
) -> CategoryCounts {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, u64)> = Vec::new();

    for record in records {
        let k = key(record);
        match slots.get(k.as_ref()) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                slots.insert(k.as_ref().to_string(), entries.len());
                entries.push((k.as_ref().to_string(), 1));
            }
        }
    }

    CategoryCounts { entries }
}
