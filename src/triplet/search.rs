//! Duplicate-free zero-sum triplet search.
//!
//! The search works over distinct values rather than positions:
//!
//! 1. `(0, 0, 0)` is emitted when zero occurs at least three times.
//! 2. Every pair of a distinct negative `i` and a distinct positive `j` is
//!    completed with `k = -i - j`. A candidate is kept when the table holds
//!    enough copies of each of its values, so `k == i` or `k == j` needs two
//!    occurrences of `k`.
//! 3. Every value `x` occurring at least twice is completed with
//!    `y = -2x` (for `y != x`), covering the `(x, x, y)` shapes.
//!
//! Candidate values are computed in `i64` so that extreme inputs such as
//! `i32::MIN` never overflow; a completion outside the `i32` range cannot
//! be in the table and is skipped.
//!
//! Running time is `O(n + |N| * |P|)` where `N` and `P` are the distinct
//! negative and positive values.

use std::collections::BTreeSet;

use super::{FrequencyTable, Triplet};

/// Set of triplets, deduplicated by value content.
pub type TripletSet = BTreeSet<Triplet>;

/// Returns every distinct triplet of input values summing to zero.
///
/// Each triplet is drawn from the input as a multiset: a value may appear in
/// a triplet only as many times as it occurs in `nums`. The operation is
/// total and never fails.
///
/// # Examples
///
/// ```rust
/// use problem_solving::triplet::{Triplet, find_zero_triplets};
///
/// let triplets = find_zero_triplets(&[-1, 0, 1, 2, -1, -4]);
/// let expected = [Triplet::new(-1, -1, 2), Triplet::new(-1, 0, 1)];
/// assert!(triplets.iter().eq(expected.iter()));
///
/// assert!(find_zero_triplets(&[1, 2]).is_empty());
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = nums.len()))]
pub fn find_zero_triplets(nums: &[i32]) -> TripletSet {
    let table = FrequencyTable::from_slice(nums);
    let triplets = table.zero_triplets();
    tracing::debug!(
        distinct = table.len(),
        triplets = triplets.len(),
        "zero-sum triplet search finished"
    );
    triplets
}

impl FrequencyTable {
    /// Returns every distinct zero-sum triplet realizable from this table.
    ///
    /// See [`find_zero_triplets`].
    pub fn zero_triplets(&self) -> TripletSet {
        let mut triplets = TripletSet::new();

        if self.count(0) >= 3 {
            triplets.insert(Triplet::new(0, 0, 0));
        }

        let negatives = self.negatives();
        let positives = self.positives();
        for &negative in &negatives {
            for &positive in &positives {
                let completion = -i64::from(negative) - i64::from(positive);
                if let Some(triplet) = self.complete(negative, positive, completion) {
                    triplets.insert(triplet);
                }
            }
        }

        for (value, count) in self.iter() {
            if count < 2 {
                continue;
            }
            let completion = -2 * i64::from(value);
            if completion == i64::from(value) {
                continue;
            }
            if let Some(triplet) = self.complete(value, value, completion) {
                triplets.insert(triplet);
            }
        }

        triplets
    }

    /// Builds `(first, second, completion)` if the completion is a value in
    /// the table and enough copies exist for every member.
    fn complete(&self, first: i32, second: i32, completion: i64) -> Option<Triplet> {
        let third = i32::try_from(completion).ok()?;
        if !self.contains(third) {
            return None;
        }
        let triplet = Triplet::new(first, second, third);
        triplet.is_realizable_from(self).then_some(triplet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triplets(expected: &[[i32; 3]]) -> TripletSet {
        expected.iter().copied().map(Triplet::from).collect()
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1, 2], &[])]
    #[case(&[0, 0], &[])]
    #[case(&[0, 0, 0], &[[0, 0, 0]])]
    #[case(&[0, 0, 0, 0], &[[0, 0, 0]])]
    #[case(&[-1, 0, 1, 2, -1, -4], &[[-1, -1, 2], [-1, 0, 1]])]
    #[case(&[1, 1, -2], &[[-2, 1, 1]])]
    #[case(&[-1, -1, 2], &[[-1, -1, 2]])]
    #[case(&[1, 2, 3, 4], &[])]
    #[case(&[-1, -2, -3], &[])]
    #[case(&[0, 1, 1], &[])]
    fn test_find_zero_triplets(#[case] input: &[i32], #[case] expected: &[[i32; 3]]) {
        assert_eq!(find_zero_triplets(input), triplets(expected));
    }

    #[rstest]
    fn test_pair_completion_requires_second_copy() {
        // -1 + 2 needs another -1, which is absent.
        assert!(find_zero_triplets(&[-1, 2]).is_empty());
        assert!(find_zero_triplets(&[-1, 2, 5]).is_empty());
    }

    #[rstest]
    fn test_repeated_value_with_distinct_completion() {
        assert_eq!(
            find_zero_triplets(&[3, -6, 3, 0]),
            triplets(&[[-6, 3, 3]])
        );
        assert_eq!(
            find_zero_triplets(&[-4, -4, 8]),
            triplets(&[[-4, -4, 8]])
        );
    }

    #[rstest]
    fn test_zero_in_the_middle() {
        assert_eq!(
            find_zero_triplets(&[-5, 0, 5, -3, 3]),
            triplets(&[[-5, 0, 5], [-3, 0, 3]])
        );
    }

    #[rstest]
    fn test_extreme_values_do_not_overflow() {
        assert!(find_zero_triplets(&[i32::MIN, i32::MAX, 2]).is_empty());
        assert!(find_zero_triplets(&[i32::MIN, i32::MIN, i32::MAX]).is_empty());
        assert_eq!(
            find_zero_triplets(&[i32::MIN, i32::MAX, 1, 0]),
            triplets(&[[i32::MIN, 1, i32::MAX]])
        );
    }

    #[rstest]
    fn test_every_result_is_zero_sum_and_realizable() {
        let input = [-4, -2, -2, -1, 0, 0, 0, 1, 2, 2, 3, 4, 6];
        let table = FrequencyTable::from_slice(&input);
        let result = find_zero_triplets(&input);

        assert!(!result.is_empty());
        for triplet in &result {
            assert!(triplet.is_zero_sum(), "{triplet} does not sum to zero");
            assert!(triplet.is_realizable_from(&table), "{triplet} is not realizable");
        }
    }

    #[rstest]
    fn test_zero_triplets_matches_free_function() {
        let input = [-1, 0, 1, 2, -1, -4];
        let table = FrequencyTable::from_slice(&input);
        assert_eq!(table.zero_triplets(), find_zero_triplets(&input));
    }
}
