//! Search and predicate functions over sequences
//!
//! These functions inspect a slice without allocating: index lookup by
//! structural equality, first-match search, and the `all`/`any`/`none`
//! quantifiers.

/// Returns the index of the first element equal to `target`, or `None` if
/// the sequence does not contain it.
///
/// Equality is structural (`PartialEq`), not identity.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::index_of;
///
/// let names = ["ada", "grace", "ada"];
/// assert_eq!(index_of(&names, &"ada"), Some(0));
/// assert_eq!(index_of(&names, &"linus"), None);
/// ```
pub fn index_of<T: PartialEq>(slice: &[T], target: &T) -> Option<usize> {
    slice.iter().position(|value| value == target)
}

/// Returns the index of the last element equal to `target`, or `None`.
pub fn last_index_of<T: PartialEq>(slice: &[T], target: &T) -> Option<usize> {
    slice.iter().rposition(|value| value == target)
}

/// Returns the first element matching the predicate, or `None` if no element
/// matches.
pub fn find<T, P>(slice: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    slice.iter().find(|value| predicate(*value))
}

/// Returns true if every element matches the predicate.
///
/// An empty sequence vacuously satisfies any predicate.
pub fn all<T, P>(slice: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    slice.iter().all(predicate)
}

/// Returns true if at least one element matches the predicate.
pub fn any<T, P>(slice: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    slice.iter().any(predicate)
}

/// Returns true if no element matches the predicate.
///
/// This is the negation of [`any`], so an empty sequence yields `true`.
pub fn none<T, P>(slice: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any(slice, predicate)
}
