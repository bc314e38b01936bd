// src/agg.rs
//
// Insertion-ordered grouping and ranking primitives shared by every report.
//
// Every distribution and top-n query in this crate follows the same recipe:
// bucket records by a key in first-encounter order, then apply a stable sort.
// Because the sorts are stable, "ties keep first-seen order" falls out of the
// bucketing order and callers never need a secondary sort key.

use std::collections::HashMap;
use std::hash::Hash;

/// A map that remembers the order in which keys were first inserted.
pub struct OrderedMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self { index: HashMap::new(), entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value slot for `key`, created with `default` on first sight.
    pub fn entry_or(&mut self, key: K, default: V) -> &mut V {
        let idx = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, default));
                i
            }
        };
        &mut self.entries[idx].1
    }

    /// Overwrite the value for `key`; a re-inserted key keeps its original
    /// position.
    pub fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, value));
            }
        }
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count key occurrences, buckets in first-encounter order.
pub fn count_occurrences<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut map = OrderedMap::new();
    for k in keys {
        *map.entry_or(k, 0) += 1;
    }
    map.into_vec()
}

/// Collect values per key, buckets in first-encounter order, values in
/// arrival order.
pub fn group_values<K, V, I>(pairs: I) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = OrderedMap::new();
    for (k, v) in pairs {
        map.entry_or(k, Vec::new()).push(v);
    }
    map.into_vec()
}

/// Stable descending sort on the value column; ties keep first-seen order.
pub fn sort_desc<K, V: Ord>(rows: &mut [(K, V)]) {
    rows.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Stable descending sort for float values. The values are finite rounded
/// report numbers, so incomparable pairs simply keep their order.
pub fn sort_desc_f64<K>(rows: &mut [(K, f64)]) {
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
}

/// Stable ascending sort on the key column.
pub fn sort_asc<K: PartialOrd, V>(rows: &mut [(K, V)]) {
    rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
}

/// Keep the first `n` rows.
pub fn top_n<T>(mut rows: Vec<T>, n: usize) -> Vec<T> {
    rows.truncate(n);
    rows
}
