//! Decimal palindrome test by numeric half-reversal.

/// Returns `true` if the decimal digits of `number` read the same forward
/// and backward.
///
/// Negative numbers are never palindromes since the leading `-` has no
/// counterpart at the end.
///
/// Fast paths:
/// - single digits are palindromes
/// - non-zero multiples of 10 are not (no number starts with `0`)
///
/// Otherwise the low half of the digits is reversed into `reversed` until it
/// reaches the remaining high half, which is then compared directly (even
/// length) or with the middle digit dropped (odd length).
///
/// # Examples
///
/// ```rust
/// use problem_solving::number::is_palindrome;
///
/// assert!(is_palindrome(121));
/// assert!(!is_palindrome(-121));
/// assert!(!is_palindrome(10));
/// ```
pub fn is_palindrome(number: i64) -> bool {
    let Ok(mut remaining) = u64::try_from(number) else {
        return false;
    };
    if remaining < 10 {
        return true;
    }
    if remaining.is_multiple_of(10) {
        return false;
    }

    let mut reversed: u64 = 0;
    while remaining > reversed {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }

    remaining == reversed || remaining == reversed / 10
}
