//! Functional-style operations over sequences
//!
//! This module contains pure, side-effect-free functions over slices:
//! - Search: `index_of`, `last_index_of`, `find`, `all`, `any`, `none`
//! - Transformation: `map`, `map_indexed`, `flat_map`, `flatten`, `plus`, `reversed`, `fold`
//! - Selection: `filter`, `filter_not`, `filter_indexed`, `filter_not_absent`, `partition`
//! - Fallible variants: `try_map`, `try_filter`, `try_fold`
//!
//! All functions in this module:
//! - Never mutate their input; results are freshly allocated
//! - Preserve element order unless the operation is `reversed`
//! - Invoke callbacks exactly in element order, left to right
//!
//! Absent elements are represented as `Option<T>` elements. Every operation
//! accepts `&[Option<T>]` and hands each slot to the callback as-is; only
//! `filter_not_absent` treats `None` specially.
//!
//! Selected elements are cloned into the result. For sharing rather than
//! copying, use a slice of references or `Rc`/`Arc` handles.

pub mod ext;
pub mod fallible;
pub mod filter;
pub mod search;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export primary functions and traits
pub use ext::{AbsentExt, FlattenExt, SequenceExt};
pub use fallible::{try_filter, try_fold, try_map};
pub use filter::{filter, filter_indexed, filter_not, filter_not_absent, partition};
pub use search::{all, any, find, index_of, last_index_of, none};
pub use transform::{flat_map, flatten, fold, map, map_indexed, plus, reversed};
