//! Zero-sum triplet search.
//!
//! This module finds every distinct group of three input values that sums
//! to zero:
//!
//! - [`find_zero_triplets`]: the search entry point
//! - [`Triplet`]: a canonical (sorted) group of three values
//! - [`FrequencyTable`]: occurrence counts of the input's distinct values
//! - [`TripletSet`]: the deduplicated result
//!
//! Uniqueness is by value content, not by originating positions: the input
//! `[-1, 0, 1, 2, -1, -4]` yields `(-1, 0, 1)` once even though two
//! different `-1`s could form it.
//!
//! # Examples
//!
//! ```rust
//! use problem_solving::triplet::{Triplet, find_zero_triplets};
//!
//! let triplets = find_zero_triplets(&[0, 0, 0, 0]);
//! assert_eq!(triplets.len(), 1);
//! assert!(triplets.contains(&Triplet::new(0, 0, 0)));
//!
//! let triplets = find_zero_triplets(&[1, 1, -2]);
//! assert!(triplets.contains(&Triplet::new(-2, 1, 1)));
//! ```

mod canonical;
mod frequency;
mod search;

pub use canonical::Triplet;
pub use frequency::FrequencyTable;
pub use search::{TripletSet, find_zero_triplets};

static_assertions::assert_impl_all!(Triplet: Send, Sync, Copy);
static_assertions::assert_impl_all!(FrequencyTable: Send, Sync);
