//! Digit-level predicates on integers.

mod palindrome;

pub use palindrome::is_palindrome;
