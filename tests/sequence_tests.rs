#![cfg(all(feature = "sequence", feature = "number"))]
//! Scenario tests for the peer utilities.

use problem_solving::prelude::*;
use rstest::rstest;

// =============================================================================
// next_permutation
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec![1, 3, 2])]
#[case(vec![3, 2, 1], vec![1, 2, 3])]
fn test_next_permutation_scenarios(#[case] mut nums: Vec<i32>, #[case] expected: Vec<i32>) {
    next_permutation(&mut nums);
    assert_eq!(nums, expected);
}

// =============================================================================
// is_palindrome
// =============================================================================

#[rstest]
#[case(121, true)]
#[case(-121, false)]
#[case(10, false)]
fn test_is_palindrome_scenarios(#[case] number: i64, #[case] expected: bool) {
    assert_eq!(is_palindrome(number), expected);
}

// =============================================================================
// plus_one
// =============================================================================

#[rstest]
#[case(&[1, 2, 3], vec![1, 2, 4])]
#[case(&[9, 9], vec![1, 0, 0])]
fn test_plus_one_scenarios(#[case] digits: &[u8], #[case] expected: Vec<u8>) {
    assert_eq!(plus_one(digits), Ok(expected));
}

#[rstest]
fn test_plus_one_reports_invalid_argument() {
    let error = plus_one(&[3, 42]).unwrap_err();
    assert_eq!(error, InvalidArgument::DigitOutOfRange { index: 1, digit: 42 });
    assert_eq!(error.argument(), "digits");
}

// =============================================================================
// summary_ranges
// =============================================================================

#[rstest]
fn test_summary_ranges_scenario() {
    assert_eq!(
        summary_ranges(&[0, 1, 2, 4, 5, 7]).unwrap(),
        vec!["0->2", "4->5", "7"]
    );
}

#[rstest]
fn test_summary_ranges_reports_invalid_argument() {
    let error = summary_ranges(&[3, 1]).unwrap_err();
    assert_eq!(
        error,
        InvalidArgument::NotStrictlyIncreasing {
            index: 1,
            previous: 3,
            current: 1,
        }
    );
    assert_eq!(error.to_string(), "nums[1] is 1, expected a value greater than 3");
}
