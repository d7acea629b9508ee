//! Compression of strictly increasing sequences into consecutive runs.

use std::fmt;

use crate::error::InvalidArgument;

/// An inclusive run of consecutive integers.
///
/// Renders as `"start"` for a single value and `"start->end"` otherwise.
///
/// # Examples
///
/// ```rust
/// use problem_solving::sequence::IntRange;
///
/// assert_eq!(IntRange::new(4, 5).to_string(), "4->5");
/// assert_eq!(IntRange::single(7).to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange {
    /// First value of the run.
    pub start: i64,
    /// Last value of the run (inclusive).
    pub end: i64,
}

impl IntRange {
    /// Creates a run from `start` to `end` inclusive.
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Creates a run holding a single value.
    pub const fn single(value: i64) -> Self {
        Self::new(value, value)
    }

    /// Returns `true` if the run holds exactly one value.
    pub const fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies within the run.
    pub const fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(formatter, "{}", self.start)
        } else {
            write!(formatter, "{}->{}", self.start, self.end)
        }
    }
}

/// Groups a strictly increasing sequence into maximal runs of consecutive
/// values.
///
/// # Errors
///
/// Returns [`InvalidArgument::NotStrictlyIncreasing`] at the first element
/// that is not greater than its predecessor.
///
/// # Examples
///
/// ```rust
/// use problem_solving::sequence::{IntRange, summarize_ranges};
///
/// assert_eq!(
///     summarize_ranges(&[0, 1, 2, 4, 5, 7]),
///     Ok(vec![IntRange::new(0, 2), IntRange::new(4, 5), IntRange::single(7)])
/// );
/// ```
pub fn summarize_ranges(nums: &[i64]) -> Result<Vec<IntRange>, InvalidArgument> {
    validate_strictly_increasing(nums)?;

    let mut ranges: Vec<IntRange> = Vec::new();
    for &value in nums {
        match ranges.last_mut() {
            Some(run) if run.end.checked_add(1) == Some(value) => run.end = value,
            _ => ranges.push(IntRange::single(value)),
        }
    }
    Ok(ranges)
}

/// Renders the runs of a strictly increasing sequence as strings.
///
/// Each run becomes `"start"` (single value) or `"start->end"`.
///
/// # Errors
///
/// Returns [`InvalidArgument::NotStrictlyIncreasing`] if `nums` is not
/// strictly increasing.
///
/// # Examples
///
/// ```rust
/// use problem_solving::sequence::summary_ranges;
///
/// assert_eq!(
///     summary_ranges(&[0, 1, 2, 4, 5, 7]).unwrap(),
///     vec!["0->2", "4->5", "7"]
/// );
/// ```
pub fn summary_ranges(nums: &[i64]) -> Result<Vec<String>, InvalidArgument> {
    Ok(summarize_ranges(nums)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

fn validate_strictly_increasing(nums: &[i64]) -> Result<(), InvalidArgument> {
    match nums.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(position) => {
            let error = InvalidArgument::NotStrictlyIncreasing {
                index: position + 1,
                previous: nums[position],
                current: nums[position + 1],
            };
            tracing::debug!(%error, "rejected unsorted range input");
            Err(error)
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0, 1, 2, 4, 5, 7], &["0->2", "4->5", "7"])]
    #[case(&[0, 2, 3, 4, 6, 8, 9], &["0", "2->4", "6", "8->9"])]
    #[case(&[], &[])]
    #[case(&[-1], &["-1"])]
    #[case(&[-3, -2, -1, 0, 1], &["-3->1"])]
    #[case(&[1, 3, 5], &["1", "3", "5"])]
    fn test_summary_ranges(#[case] nums: &[i64], #[case] expected: &[&str]) {
        let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        assert_eq!(summary_ranges(nums), Ok(expected));
    }

    #[rstest]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(
            summarize_ranges(&[i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX]),
            Ok(vec![
                IntRange::new(i64::MIN, i64::MIN + 1),
                IntRange::new(i64::MAX - 1, i64::MAX),
            ])
        );
    }

    #[rstest]
    #[case(&[1, 1], 1, 1, 1)]
    #[case(&[0, 2, 1], 2, 2, 1)]
    #[case(&[5, 6, 7, 3], 3, 7, 3)]
    fn test_rejects_non_increasing(
        #[case] nums: &[i64],
        #[case] index: usize,
        #[case] previous: i64,
        #[case] current: i64,
    ) {
        assert_eq!(
            summarize_ranges(nums),
            Err(InvalidArgument::NotStrictlyIncreasing {
                index,
                previous,
                current,
            })
        );
    }

    #[rstest]
    fn test_int_range_contains() {
        let range = IntRange::new(4, 6);
        assert!(range.contains(4));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert!(!range.is_single());
    }
}
