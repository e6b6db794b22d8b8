//! Transformations that build a new sequence from an existing one
//!
//! Every function here reads its input through a shared borrow and returns
//! a freshly allocated `Vec`; the input slice is never modified.

/// Returns a vector containing the results of applying `transform` to each
/// element of the original slice, in order.
pub fn map<T, R, F>(slice: &[T], transform: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    slice.iter().map(transform).collect()
}

/// Like [`map`], but the transform also receives the element's index.
pub fn map_indexed<T, R, F>(slice: &[T], mut transform: F) -> Vec<R>
where
    F: FnMut(usize, &T) -> R,
{
    slice
        .iter()
        .enumerate()
        .map(|(index, value)| transform(index, value))
        .collect()
}

/// Applies `transform` to each element and concatenates the produced
/// sequences in order.
pub fn flat_map<T, I, F>(slice: &[T], transform: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&T) -> I,
{
    slice.iter().flat_map(transform).collect()
}

/// Concatenates all inner sequences in outer order.
pub fn flatten<T, S>(slices: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = slices.iter().map(|inner| inner.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for inner in slices {
        result.extend_from_slice(inner.as_ref());
    }
    result
}

/// Returns all elements of `slice` followed by all elements of `other`.
pub fn plus<T: Clone>(slice: &[T], other: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(slice.len() + other.len());
    result.extend_from_slice(slice);
    result.extend_from_slice(other);
    result
}

/// Returns a new vector holding the elements in reverse order.
pub fn reversed<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.iter().rev().cloned().collect()
}

/// Accumulates a value starting with `initial` and applying `operation`
/// from left to right to the accumulator and each element.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::fold;
///
/// let words = ["a", "b", "c"];
/// let joined = fold(&words, String::new(), |mut acc, w| {
///     acc.push_str(w);
///     acc
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn fold<T, A, F>(slice: &[T], initial: A, operation: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    slice.iter().fold(initial, operation)
}
