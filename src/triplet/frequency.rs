//! Occurrence counts over the distinct values of an input sequence.
//!
//! The backing hash map is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxHashMap`]
//! - `ahash` feature (without `fxhash`): [`ahash::AHashMap`]
//! - otherwise: [`std::collections::HashMap`]

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "fxhash")]
type CountMap = rustc_hash::FxHashMap<i32, usize>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type CountMap = ahash::AHashMap<i32, usize>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type CountMap = std::collections::HashMap<i32, usize>;

/// Mapping from each distinct value to the number of times it occurs.
///
/// Built once from an input sequence and read-only afterwards.
///
/// # Examples
///
/// ```rust
/// use problem_solving::triplet::FrequencyTable;
///
/// let table = FrequencyTable::from_slice(&[-1, 0, 1, 2, -1, -4]);
/// assert_eq!(table.count(-1), 2);
/// assert_eq!(table.count(7), 0);
/// assert_eq!(table.len(), 5);
/// assert_eq!(table.negatives(), vec![-4, -1]);
/// assert_eq!(table.positives(), vec![1, 2]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: CountMap,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every value in `values`.
    pub fn from_slice(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }

    /// Returns how many times `value` occurred in the input.
    #[inline]
    pub fn count(&self, value: i32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Returns `true` if `value` occurred at least once.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.counts.contains_key(&value)
    }

    /// Returns the number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the input was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(value, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Returns the distinct strictly negative values, ascending.
    pub fn negatives(&self) -> Vec<i32> {
        self.sorted_distinct(|value| value < 0)
    }

    /// Returns the distinct strictly positive values, ascending.
    pub fn positives(&self) -> Vec<i32> {
        self.sorted_distinct(|value| value > 0)
    }

    fn sorted_distinct(&self, predicate: impl Fn(i32) -> bool) -> Vec<i32> {
        let mut values: Vec<i32> = self
            .counts
            .keys()
            .copied()
            .filter(|&value| predicate(value))
            .collect();
        values.sort_unstable();
        values
    }
}

impl FromIterator<i32> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut counts = CountMap::default();
        for value in iter {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }
}

impl<'a> FromIterator<&'a i32> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a i32>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(i32, usize)> = self.iter().collect();
        entries.sort_unstable();
        formatter.debug_map().entries(entries).finish()
    }
}
