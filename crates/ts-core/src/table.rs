//! The random table type: weighted and uniform rolling, validation.
//!
//! A table maps keys to text values. Keys come in two dialects: plain
//! strings (`"sword"`) rolled uniformly, or integers and integer ranges
//! (`"5"`, `"12-20"`) rolled weighted by range width against the largest
//! endpoint in the table.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A named lookup table mapping keys to the text values a roll can produce.
///
/// Immutable once built; rolling never mutates the table. Serializes as a
/// plain JSON object, which is the on-disk format under `tables/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    entries: BTreeMap<String, String>,
}

/// Errors produced while rolling on a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// The table has no entries to pick from.
    #[error("empty table")]
    Empty,

    /// The table's range keys leave a gap that the roll landed in.
    #[error("No result for roll {0}")]
    NoMatch(u32),
}

/// A problem found while validating a table's keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableIssue {
    /// A non-numeric key in a table that otherwise uses numeric keys.
    /// The roller skips such keys, so the entry is unreachable.
    #[error("key {0:?} is neither an integer nor an integer range")]
    MalformedKey(String),

    /// A range key whose lower bound exceeds its upper bound.
    #[error("range {0:?} has min > max and can never match")]
    InvertedRange(String),

    /// Two range keys cover at least one common number; which entry wins
    /// depends on iteration order.
    #[error("ranges {0:?} and {1:?} overlap")]
    OverlappingRanges(String, String),
}

/// A numeric key parsed into its inclusive span.
#[derive(Debug, Clone, Copy)]
struct RangeEntry<'a> {
    min: u32,
    max: u32,
    key: &'a str,
}

/// Parse a key as `"n"` or `"min-max"`. Returns `None` for anything else.
fn parse_range_key(key: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = key.split('-').collect();
    match parts.as_slice() {
        [n] => {
            let n = n.trim().parse().ok()?;
            Some((n, n))
        }
        [min, max] => {
            let min = min.trim().parse().ok()?;
            let max = max.trim().parse().ok()?;
            Some((min, max))
        }
        _ => None,
    }
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// The fallback table substituted when a named table cannot be found.
    pub fn missing(name: &str) -> Self {
        let mut table = Self::new();
        table.insert("1", format!("Missing table: {name}"));
        table
    }

    /// Look up the value stored under a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Numeric entries plus the largest endpoint seen. Empty when the table
    /// has no numeric keys at all.
    fn ranges(&self) -> (Vec<RangeEntry<'_>>, u32) {
        let mut ranges = Vec::new();
        let mut max_endpoint = 0;
        for key in self.entries.keys() {
            if let Some((min, max)) = parse_range_key(key) {
                ranges.push(RangeEntry { min, max, key });
                max_endpoint = max_endpoint.max(max).max(min);
            }
        }
        (ranges, max_endpoint)
    }

    /// Whether the table rolls weighted (it has at least one numeric or
    /// range key) rather than uniformly over raw keys.
    pub fn is_weighted(&self) -> bool {
        let (ranges, _) = self.ranges();
        !ranges.is_empty()
    }

    /// Keys the weighted roller skips: non-numeric keys in a table that has
    /// at least one numeric key. Empty for purely textual tables.
    pub fn skipped_keys(&self) -> Vec<&str> {
        let (ranges, _) = self.ranges();
        if ranges.is_empty() {
            return Vec::new();
        }
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|key| parse_range_key(key).is_none())
            .collect()
    }

    /// Pick a key at random.
    ///
    /// Tables with any numeric key roll weighted: a uniform draw in
    /// `[1, largest endpoint]`, first range containing the draw wins. Tables
    /// with only plain keys pick uniformly among all keys. Callers that need
    /// the displayed text index the table by the returned key.
    pub fn roll(&self, rng: &mut StdRng) -> Result<&str, RollError> {
        if self.entries.is_empty() {
            return Err(RollError::Empty);
        }
        let (ranges, max_endpoint) = self.ranges();
        if ranges.is_empty() {
            let index = rng.random_range(0..self.entries.len());
            return self.keys().nth(index).ok_or(RollError::Empty);
        }
        if max_endpoint == 0 {
            return Err(RollError::NoMatch(0));
        }
        let roll = rng.random_range(1..=max_endpoint);
        ranges
            .iter()
            .find(|r| r.min <= roll && roll <= r.max)
            .map(|r| r.key)
            .ok_or(RollError::NoMatch(roll))
    }

    /// Check the table's keys for problems a roll cannot report: malformed
    /// keys mixed into a numeric table, inverted ranges, and overlapping
    /// ranges (where first-match-wins would be order-dependent).
    pub fn validate(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        let (ranges, _) = self.ranges();
        if ranges.is_empty() {
            // Purely textual tables have nothing to misparse.
            return issues;
        }
        for key in self.skipped_keys() {
            issues.push(TableIssue::MalformedKey(key.to_string()));
        }
        for range in &ranges {
            if range.min > range.max {
                issues.push(TableIssue::InvertedRange(range.key.to_string()));
            }
        }
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                if a.min <= b.max && b.min <= a.max {
                    issues.push(TableIssue::OverlappingRanges(
                        a.key.to_string(),
                        b.key.to_string(),
                    ));
                }
            }
        }
        issues
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
