//! Big-endian decimal digit arithmetic.

use crate::error::InvalidArgument;

/// Returns the digits of the number represented by `digits`, plus one.
///
/// `digits` holds a non-negative decimal number, most significant digit
/// first. The carry propagates from the last digit; the result grows by one
/// leading `1` only if every digit was `9`. An empty slice therefore yields
/// `[1]`.
///
/// # Errors
///
/// Returns [`InvalidArgument::DigitOutOfRange`] if any element is greater
/// than `9`.
///
/// # Examples
///
/// ```rust
/// use problem_solving::sequence::plus_one;
///
/// assert_eq!(plus_one(&[1, 2, 3]), Ok(vec![1, 2, 4]));
/// assert_eq!(plus_one(&[9, 9]), Ok(vec![1, 0, 0]));
/// assert!(plus_one(&[1, 10]).is_err());
/// ```
pub fn plus_one(digits: &[u8]) -> Result<Vec<u8>, InvalidArgument> {
    if let Some((index, &digit)) = digits.iter().enumerate().find(|(_, digit)| **digit > 9) {
        let error = InvalidArgument::DigitOutOfRange { index, digit };
        tracing::debug!(%error, "rejected digit array");
        return Err(error);
    }

    let mut result = digits.to_vec();
    for digit in result.iter_mut().rev() {
        if *digit < 9 {
            *digit += 1;
            return Ok(result);
        }
        *digit = 0;
    }

    result.insert(0, 1);
    Ok(result)
}
