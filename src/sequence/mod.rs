//! Single-pass routines over integer sequences.
//!
//! - [`next_permutation`]: in-place lexicographic successor
//! - [`plus_one`]: increment of a big-endian decimal digit array
//! - [`summarize_ranges`] / [`summary_ranges`]: consecutive-run compression
//!   of a strictly increasing sequence
//!
//! # Examples
//!
//! ```rust
//! use problem_solving::sequence::{next_permutation, plus_one, summary_ranges};
//!
//! let mut nums = [1, 2, 3];
//! next_permutation(&mut nums);
//! assert_eq!(nums, [1, 3, 2]);
//!
//! assert_eq!(plus_one(&[9, 9]).unwrap(), vec![1, 0, 0]);
//! assert_eq!(summary_ranges(&[0, 1, 2, 4, 5, 7]).unwrap(), vec!["0->2", "4->5", "7"]);
//! ```

mod digits;
mod permutation;
mod ranges;

pub use digits::plus_one;
pub use permutation::next_permutation;
pub use ranges::{IntRange, summarize_ranges, summary_ranges};

static_assertions::assert_impl_all!(IntRange: Send, Sync, Copy);
