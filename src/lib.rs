//! # problem-solving
//!
//! Small, self-contained algorithmic routines, each a pure function with no
//! shared state.
//!
//! ## Overview
//!
//! - **Triplets**: every distinct group of three input values summing to
//!   zero, deduplicated by value content
//! - **Sequences**: next lexicographic permutation, decimal digit-array
//!   increment, consecutive-run compression
//! - **Numbers**: decimal palindrome check
//!
//! ## Feature Flags
//!
//! - `triplet`: Zero-sum triplet search
//! - `sequence`: Sequence routines
//! - `number`: Integer predicates
//! - `serde`: Serialize/Deserialize for [`Triplet`](triplet::Triplet) and
//!   [`IntRange`](sequence::IntRange)
//! - `fxhash` / `ahash`: faster hashers for the triplet frequency table
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use problem_solving::prelude::*;
//!
//! let triplets = find_zero_triplets(&[-1, 0, 1, 2, -1, -4]);
//! assert!(triplets.contains(&Triplet::new(-1, 0, 1)));
//! assert!(triplets.contains(&Triplet::new(-1, -1, 2)));
//! assert_eq!(triplets.len(), 2);
//!
//! assert!(is_palindrome(121));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module's public items.
///
/// # Usage
///
/// ```rust
/// use problem_solving::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "triplet")]
    pub use crate::triplet::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "number")]
    pub use crate::number::*;
}

pub mod error;

#[cfg(feature = "triplet")]
pub mod triplet;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "number")]
pub mod number;
