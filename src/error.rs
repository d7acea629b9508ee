//! Error type for out-of-domain arguments.
//!
//! Most routines in this crate are total. The ones with documented
//! preconditions ([`plus_one`](crate::sequence::plus_one) and
//! [`summary_ranges`](crate::sequence::summary_ranges)) validate them at the
//! boundary and report violations through [`InvalidArgument`].

use thiserror::Error;

/// An argument fell outside the documented input domain of a routine.
///
/// # Examples
///
/// ```rust
/// use problem_solving::error::InvalidArgument;
///
/// let error = InvalidArgument::DigitOutOfRange { index: 2, digit: 12 };
/// assert_eq!(error.argument(), "digits");
/// assert_eq!(error.to_string(), "digits[2] is 12, expected a decimal digit 0..=9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// An element of a digit array was not a single decimal digit.
    #[error("digits[{index}] is {digit}, expected a decimal digit 0..=9")]
    DigitOutOfRange {
        /// Position of the offending digit.
        index: usize,
        /// The value found at that position.
        digit: u8,
    },
    /// A sequence required to be strictly increasing was not.
    #[error("nums[{index}] is {current}, expected a value greater than {previous}")]
    NotStrictlyIncreasing {
        /// Position of the element that broke the ordering.
        index: usize,
        /// The element immediately before `index`.
        previous: i64,
        /// The element at `index`.
        current: i64,
    },
}

impl InvalidArgument {
    /// Returns the name of the parameter that was rejected.
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::DigitOutOfRange { .. } => "digits",
            Self::NotStrictlyIncreasing { .. } => "nums",
        }
    }

    /// Returns the position of the offending element.
    pub const fn index(&self) -> usize {
        match self {
            Self::DigitOutOfRange { index, .. } | Self::NotStrictlyIncreasing { index, .. } => {
                *index
            }
        }
    }
}
