//! Filtering and partitioning
//!
//! Selected elements are cloned into the result in their original order.

/// Splits the slice into `(matches, non_matches)`.
///
/// Every element lands in exactly one of the two vectors, and relative order
/// is preserved within each.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::partition;
///
/// let (even, odd) = partition(&[1, 2, 3, 4, 5], |n| n % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<T, P>(slice: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut matches = Vec::new();
    let mut unmatched = Vec::new();
    for value in slice {
        if predicate(value) {
            matches.push(value.clone());
        } else {
            unmatched.push(value.clone());
        }
    }
    (matches, unmatched)
}

/// Returns the elements matching the predicate.
pub fn filter<T, P>(slice: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    select(slice, predicate, true)
}

/// Returns the elements not matching the predicate.
pub fn filter_not<T, P>(slice: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    select(slice, predicate, false)
}

/// Returns the elements matching the predicate, which also receives each
/// element's index.
pub fn filter_indexed<T, P>(slice: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(usize, &T) -> bool,
{
    slice
        .iter()
        .enumerate()
        .filter(|(index, value)| predicate(*index, *value))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Drops absent elements and returns the present values in order.
pub fn filter_not_absent<T: Clone>(slice: &[Option<T>]) -> Vec<T> {
    slice.iter().flatten().cloned().collect()
}

fn select<T, P>(slice: &[T], mut predicate: P, keep: bool) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    slice
        .iter()
        .filter(|value| predicate(*value) == keep)
        .cloned()
        .collect()
}
