//! Insertion-ordered counting map.
//!
//! Keys start at zero on first touch. Ranking is by count descending; keys
//! with equal counts keep the order in which they were first seen, which is
//! the tie-break every top-N query in this crate relies on.

use indexmap::IndexMap;
use std::hash::Hash;

/// Key -> count, remembering first-seen order
#[derive(Debug, Clone)]
pub struct Counter<K> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Counter<K> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Add one to `key`.
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Add `n` to `key`. Adding zero still registers the key.
    pub fn add(&mut self, key: K, n: usize) {
        *self.counts.entry(key).or_insert(0) += n;
    }

    /// Current count for `key`; zero if never touched.
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// The key with the highest count, first-seen on ties.
    pub fn most_common(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, &count) in &self.counts {
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((key, count)),
            }
        }
        best
    }

    /// All entries, count descending, first-seen on ties.
    pub fn ranked(self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.counts.into_iter().collect();
        // sort_by is stable, so equal counts stay in insertion order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The first `n` entries of [`Counter::ranked`].
    pub fn top(self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<K: Hash + Eq> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
