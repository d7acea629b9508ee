//! In-place lexicographic successor of a sequence.

/// Rearranges `elements` into the lexicographically next greater
/// permutation.
///
/// Returns `true` if a greater permutation existed. Otherwise the slice was
/// the last permutation (non-increasing) and is rearranged into the lowest
/// one (ascending), and `false` is returned.
///
/// The pivot is the rightmost position whose element is smaller than its
/// successor. It is swapped with the rightmost larger element after it, and
/// the suffix after the pivot is reversed.
///
/// # Examples
///
/// ```rust
/// use problem_solving::sequence::next_permutation;
///
/// let mut nums = vec![1, 2, 3];
/// assert!(next_permutation(&mut nums));
/// assert_eq!(nums, vec![1, 3, 2]);
///
/// let mut nums = vec![3, 2, 1];
/// assert!(!next_permutation(&mut nums));
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(elements: &mut [T]) -> bool {
    let Some(pivot) = elements
        .windows(2)
        .rposition(|pair| pair[0] < pair[1])
    else {
        elements.reverse();
        return false;
    };

    // The suffix after the pivot is non-increasing, so a larger element exists.
    let successor = elements
        .iter()
        .rposition(|element| *element > elements[pivot])
        .unwrap_or(pivot + 1);
    elements.swap(pivot, successor);
    elements[pivot + 1..].reverse();
    true
}
