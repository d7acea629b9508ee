//! Canonical, order-insensitive triplet of integers.

use std::fmt;

use super::FrequencyTable;

/// Three integer values stored in non-decreasing order.
///
/// Every constructor sorts its input, so two triplets holding the same
/// values in any original order compare equal and hash identically.
///
/// # Examples
///
/// ```rust
/// use problem_solving::triplet::Triplet;
///
/// let triplet = Triplet::new(2, -1, -1);
/// assert_eq!(triplet.values(), [-1, -1, 2]);
/// assert_eq!(triplet, Triplet::from([-1, 2, -1]));
/// assert!(triplet.is_zero_sum());
/// assert_eq!(triplet.to_string(), "(-1, -1, 2)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[i32; 3]", into = "[i32; 3]")
)]
pub struct Triplet([i32; 3]);

impl Triplet {
    /// Creates a triplet from three values in any order.
    #[inline]
    pub fn new(first: i32, second: i32, third: i32) -> Self {
        Self::from([first, second, third])
    }

    /// Returns the values in ascending order.
    #[inline]
    pub const fn values(&self) -> [i32; 3] {
        self.0
    }

    /// Returns the smallest value.
    #[inline]
    pub const fn smallest(&self) -> i32 {
        self.0[0]
    }

    /// Returns the largest value.
    #[inline]
    pub const fn largest(&self) -> i32 {
        self.0[2]
    }

    /// Returns the sum of the three values, widened so it cannot overflow.
    #[inline]
    pub fn sum(&self) -> i64 {
        self.0.iter().copied().map(i64::from).sum()
    }

    /// Returns `true` if the three values sum to exactly zero.
    #[inline]
    pub fn is_zero_sum(&self) -> bool {
        self.sum() == 0
    }

    /// Returns how many times `value` appears in this triplet.
    #[inline]
    pub fn multiplicity(&self, value: i32) -> usize {
        self.0.iter().filter(|&&element| element == value).count()
    }

    /// Returns `true` if the table holds enough copies of every value to
    /// build this triplet.
    ///
    /// A value appearing twice in the triplet needs at least two
    /// occurrences in the table, three times needs at least three.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use problem_solving::triplet::{FrequencyTable, Triplet};
    ///
    /// let table = FrequencyTable::from_slice(&[1, -2, 1]);
    /// assert!(Triplet::new(1, 1, -2).is_realizable_from(&table));
    /// assert!(!Triplet::new(-2, -2, 4).is_realizable_from(&table));
    /// ```
    pub fn is_realizable_from(&self, table: &FrequencyTable) -> bool {
        self.0
            .iter()
            .all(|&value| table.count(value) >= self.multiplicity(value))
    }
}

impl From<[i32; 3]> for Triplet {
    fn from(mut values: [i32; 3]) -> Self {
        values.sort_unstable();
        Self(values)
    }
}

impl From<Triplet> for [i32; 3] {
    fn from(triplet: Triplet) -> Self {
        triplet.0
    }
}

impl From<Triplet> for Vec<i32> {
    fn from(triplet: Triplet) -> Self {
        triplet.0.to_vec()
    }
}

impl fmt::Debug for Triplet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Triplet{self}")
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.0;
        write!(formatter, "({first}, {second}, {third})")
    }
}
