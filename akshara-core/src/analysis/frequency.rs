//! Occurrence counting with stable ordering

use crate::domain::Syllable;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys and remembers first-occurrence order
///
/// Ranking sorts by descending count and breaks ties by first occurrence,
/// so the same input always produces the same display order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
    total: usize,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K: Clone + Eq + Hash> Tally<K> {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`
    pub fn record(&mut self, key: &K) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), 1));
            }
        }
        self.total += 1;
    }

    /// Record every key from an iterator
    pub fn record_all<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        for key in keys {
            self.record(key);
        }
    }

    /// Occurrences of `key` (zero if never seen)
    pub fn count(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Total occurrences recorded
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// Entries sorted by descending count, ties in first-occurrence order
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        // Stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Syllable occurrence counts
pub type SyllableFrequency = Tally<Syllable>;
