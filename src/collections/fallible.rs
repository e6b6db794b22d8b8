//! Fallible variants of the sequence transformations
//!
//! Callbacks return `Result`. Traversal stops at the first `Err`, which is
//! handed back to the caller as-is.

/// Like [`map`](super::map), but stops at the first error returned by
/// `transform`.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2"], |s| s.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed = try_map(&["1", "x"], |s| s.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_map<T, R, E, F>(slice: &[T], transform: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T) -> Result<R, E>,
{
    slice.iter().map(transform).collect()
}

/// Like [`filter`](super::filter), but stops at the first error returned by
/// `predicate`.
pub fn try_filter<T, E, P>(slice: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for value in slice {
        if predicate(value)? {
            result.push(value.clone());
        }
    }
    Ok(result)
}

/// Like [`fold`](super::fold), but stops at the first error returned by
/// `operation`.
pub fn try_fold<T, A, E, F>(slice: &[T], initial: A, mut operation: F) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    let mut acc = initial;
    for value in slice {
        acc = operation(acc, value)?;
    }
    Ok(acc)
}
