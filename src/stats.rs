//! Frequency statistics over record fields

use std::{
    collections::{hash_map, HashMap},
    hash::Hash,
};

/// Find the most frequent value of a sequence (its mode)
///
/// If several values share the highest frequency, the one that appears first
/// in the input sequence wins. Returns `None` for empty sequences.
pub fn mode<K: Eq + Hash>(values: impl IntoIterator<Item = K>) -> Option<K> {
    let mut tally = Tally::new();
    for value in values {
        tally.add(value);
    }
    tally.finish()
}

/// Occurence counter for the values of a field
///
/// Accumulated with [`add()`](Self::add), then turned into the most frequent
/// value with [`finish()`](Self::finish).
#[derive(Clone, Debug)]
pub struct Tally<K> {
    /// For each distinct value, statistics collected so far
    counts: HashMap<K, ValueStats>,

    /// Number of values seen so far
    seen: usize,
}
//
impl<K: Eq + Hash> Tally<K> {
    /// Set up the accumulator
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            seen: 0,
        }
    }

    /// Record one occurence of a value
    pub fn add(&mut self, value: K) {
        match self.counts.entry(value) {
            hash_map::Entry::Occupied(o) => o.into_mut().count += 1,
            hash_map::Entry::Vacant(v) => {
                v.insert(ValueStats {
                    first_seen: self.seen,
                    count: 1,
                });
            }
        }
        self.seen += 1;
    }

    /// Extract the most frequent value, first-seen value winning ties
    pub fn finish(self) -> Option<K> {
        self.counts
            .into_iter()
            .max_by(|(_, lhs), (_, rhs)| {
                lhs.count
                    .cmp(&rhs.count)
                    .then(rhs.first_seen.cmp(&lhs.first_seen))
            })
            .map(|(value, _stats)| value)
    }
}
//
impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// What we know about one distinct value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ValueStats {
    /// Position of the first occurence in the input sequence
    first_seen: usize,

    /// Number of occurences
    count: usize,
}
