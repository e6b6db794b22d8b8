//! Method-style access to the sequence functions
//!
//! ```rust
//! use utilkit::collections::{AbsentExt, SequenceExt};
//!
//! let ages = vec![10, 20, 30, 40];
//! assert_eq!(ages.filter_not(|&a| a > 25), vec![10, 20]);
//! assert!(ages.none(|&a| a > 40));
//!
//! let maybe = [Some(1), None, Some(3)];
//! assert_eq!(maybe.filter_not_absent(), vec![1, 3]);
//! ```

use super::{fallible, filter, search, transform};

/// Extension trait exposing the sequence operations as methods on slices
/// (and, through deref, on `Vec`s and arrays).
pub trait SequenceExt<T> {
    /// See [`index_of`](search::index_of)
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`last_index_of`](search::last_index_of)
    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`map`](transform::map)
    fn map<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(&T) -> R;

    /// See [`map_indexed`](transform::map_indexed)
    fn map_indexed<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(usize, &T) -> R;

    /// See [`flat_map`](transform::flat_map)
    fn flat_map<I, F>(&self, transform: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&T) -> I;

    /// See [`partition`](filter::partition)
    fn partition<P>(&self, predicate: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`plus`](transform::plus)
    fn plus(&self, other: &[T]) -> Vec<T>
    where
        T: Clone;

    /// See [`reversed`](transform::reversed)
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;

    /// See [`filter`](filter::filter)
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`filter_not`](filter::filter_not)
    fn filter_not<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`filter_indexed`](filter::filter_indexed)
    fn filter_indexed<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(usize, &T) -> bool;

    /// See [`find`](search::find)
    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// See [`all`](search::all)
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`any`](search::any)
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`none`](search::none); true when no element matches
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`fold`](transform::fold)
    fn fold<A, F>(&self, initial: A, operation: F) -> A
    where
        F: FnMut(A, &T) -> A;

    /// See [`try_map`](fallible::try_map)
    fn try_map<R, E, F>(&self, transform: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&T) -> Result<R, E>;

    /// See [`try_filter`](fallible::try_filter)
    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// See [`try_fold`](fallible::try_fold)
    fn try_fold<A, E, F>(&self, initial: A, operation: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>;
}

impl<T> SequenceExt<T> for [T] {
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::index_of(self, target)
    }

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::last_index_of(self, target)
    }

    fn map<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        transform::map(self, transform)
    }

    fn map_indexed<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(usize, &T) -> R,
    {
        transform::map_indexed(self, transform)
    }

    fn flat_map<I, F>(&self, transform: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&T) -> I,
    {
        transform::flat_map(self, transform)
    }

    fn partition<P>(&self, predicate: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter::partition(self, predicate)
    }

    fn plus(&self, other: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        transform::plus(self, other)
    }

    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        transform::reversed(self)
    }

    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter::filter(self, predicate)
    }

    fn filter_not<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter::filter_not(self, predicate)
    }

    fn filter_indexed<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(usize, &T) -> bool,
    {
        filter::filter_indexed(self, predicate)
    }

    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        search::find(self, predicate)
    }

    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        search::all(self, predicate)
    }

    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        search::any(self, predicate)
    }

    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        search::none(self, predicate)
    }

    fn fold<A, F>(&self, initial: A, operation: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        transform::fold(self, initial, operation)
    }

    fn try_map<R, E, F>(&self, transform: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&T) -> Result<R, E>,
    {
        fallible::try_map(self, transform)
    }

    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>,
    {
        fallible::try_filter(self, predicate)
    }

    fn try_fold<A, E, F>(&self, initial: A, operation: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>,
    {
        fallible::try_fold(self, initial, operation)
    }
}

/// Extension trait for sequences whose elements may be absent.
pub trait AbsentExt<T> {
    /// Drops absent elements, keeping the present values in order
    fn filter_not_absent(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> AbsentExt<T> for [Option<T>] {
    fn filter_not_absent(&self) -> Vec<T>
    where
        T: Clone,
    {
        filter::filter_not_absent(self)
    }
}

/// Extension trait for sequences of sequences.
pub trait FlattenExt<T> {
    /// Concatenates the inner sequences in outer order
    fn flatten(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T, S> FlattenExt<T> for [S]
where
    S: AsRef<[T]>,
{
    fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        transform::flatten(self)
    }
}
