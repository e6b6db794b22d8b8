//! Property tests for the sequence operations
//!
//! This file verifies the structural laws of the collection functions:
//! - Length and order preservation for `map`, `plus`, `reversed`
//! - `partition` splits without loss or duplication
//! - `filter` / `filter_not` agree with `partition`
//! - The quantifiers agree with each other
//!
//! These tests use proptest for automated property verification.

use proptest::prelude::*;
use utilkit::collections::{
    all, any, filter, filter_indexed, filter_not, filter_not_absent, find, flat_map, flatten,
    fold, index_of, last_index_of, map, map_indexed, none, partition, plus, reversed, try_fold,
    SequenceExt,
};

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

fn maybe_elements() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::of(-50i32..50), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: map preserves length and applies the transform pointwise
    #[test]
    fn prop_map_is_pointwise(seq in elements()) {
        let mapped = map(&seq, |n| n * 3 + 1);

        prop_assert_eq!(mapped.len(), seq.len());
        for (i, n) in seq.iter().enumerate() {
            prop_assert_eq!(mapped[i], n * 3 + 1);
        }
    }

    /// Property: map_indexed hands out consecutive indices
    #[test]
    fn prop_map_indexed_indices(seq in elements()) {
        let indices = map_indexed(&seq, |i, _| i);

        prop_assert_eq!(indices, (0..seq.len()).collect::<Vec<_>>());
    }

    /// Property: partition halves form an order-preserving split
    #[test]
    fn prop_partition_is_lossless(seq in elements(), pivot in -50i32..50) {
        let (matches, unmatched) = partition(&seq, |&n| n < pivot);

        prop_assert_eq!(matches.len() + unmatched.len(), seq.len());
        prop_assert!(matches.iter().all(|&n| n < pivot));
        prop_assert!(unmatched.iter().all(|&n| n >= pivot));

        // Merging back by predicate reproduces the input
        let (mut m, mut u) = (matches.iter(), unmatched.iter());
        for n in &seq {
            let next = if *n < pivot { m.next() } else { u.next() };
            prop_assert_eq!(next, Some(n));
        }
    }

    /// Property: filter and filter_not are the halves of partition
    #[test]
    fn prop_filter_agrees_with_partition(seq in elements(), pivot in -50i32..50) {
        let (matches, unmatched) = partition(&seq, |&n| n % 3 == 0 || n > pivot);

        prop_assert_eq!(filter(&seq, |&n| n % 3 == 0 || n > pivot), matches);
        prop_assert_eq!(filter_not(&seq, |&n| n % 3 == 0 || n > pivot), unmatched);
    }

    /// Property: filter_indexed with an always-true predicate is a copy
    #[test]
    fn prop_filter_indexed_identity(seq in elements()) {
        prop_assert_eq!(filter_indexed(&seq, |_, _| true), seq.clone());
        prop_assert!(filter_indexed(&seq, |_, _| false).is_empty());
    }

    /// Property: reversing twice restores the input
    #[test]
    fn prop_reversed_round_trip(seq in elements()) {
        let once = reversed(&seq);

        prop_assert_eq!(once.len(), seq.len());
        prop_assert_eq!(reversed(&once), seq);
    }

    /// Property: plus is concatenation
    #[test]
    fn prop_plus_concatenates(a in elements(), b in elements()) {
        let joined = plus(&a, &b);

        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(&joined[..a.len()], &a[..]);
        prop_assert_eq!(&joined[a.len()..], &b[..]);
    }

    /// Property: flatten and flat_map agree with std
    #[test]
    fn prop_flatten_concatenates(nested in prop::collection::vec(elements(), 0..8)) {
        let expected: Vec<i32> = nested.iter().flatten().copied().collect();

        prop_assert_eq!(flatten(&nested), expected.clone());
        prop_assert_eq!(flat_map(&nested, |inner| inner.clone()), expected);
    }

    /// Property: filter_not_absent keeps exactly the present values in order
    #[test]
    fn prop_filter_not_absent(seq in maybe_elements()) {
        let present = filter_not_absent(&seq);
        let absent = seq.iter().filter(|slot| slot.is_none()).count();

        prop_assert_eq!(present.len() + absent, seq.len());
        prop_assert_eq!(map(&present, |&n| Some(n)), filter(&seq, |slot| slot.is_some()));
    }

    /// Property: none is the negation of any, and all agrees with none on the complement
    #[test]
    fn prop_quantifiers_agree(seq in elements(), pivot in -50i32..50) {
        let any_above = any(&seq, |&n| n > pivot);

        prop_assert_eq!(none(&seq, |&n| n > pivot), !any_above);
        prop_assert_eq!(all(&seq, |&n| n <= pivot), !any_above);
        prop_assert_eq!(find(&seq, |&n| n > pivot).is_some(), any_above);
    }

    /// Property: index_of and last_index_of bracket every match
    #[test]
    fn prop_index_bounds(seq in elements(), target in -50i32..50) {
        match (index_of(&seq, &target), last_index_of(&seq, &target)) {
            (Some(first), Some(last)) => {
                prop_assert!(first <= last);
                prop_assert_eq!(seq[first], target);
                prop_assert_eq!(seq[last], target);
                prop_assert!(!seq[..first].contains(&target));
                prop_assert!(!seq[last + 1..].contains(&target));
            }
            (None, None) => prop_assert!(!seq.contains(&target)),
            other => prop_assert!(false, "inconsistent lookup: {:?}", other),
        }
    }

    /// Property: fold visits elements left to right
    #[test]
    fn prop_fold_order(seq in elements()) {
        let visited = fold(&seq, Vec::new(), |mut acc, &n| {
            acc.push(n);
            acc
        });
        let checked: Result<i64, ()> = try_fold(&seq, 0i64, |acc, &n| Ok(acc + i64::from(n)));

        prop_assert_eq!(visited, seq.clone());
        prop_assert_eq!(checked, Ok(seq.iter().map(|&n| i64::from(n)).sum::<i64>()));
    }

    /// Property: operations never mutate their input
    #[test]
    fn prop_inputs_untouched(seq in elements()) {
        let snapshot = seq.clone();

        let _ = seq.reversed();
        let _ = seq.partition(|&n| n > 0);
        let _ = seq.plus(&snapshot);
        let _ = seq.filter_not(|&n| n == 0);

        prop_assert_eq!(seq, snapshot);
    }
}

#[test]
fn test_callbacks_run_in_order() {
    let seq = vec!["a", "b", "c"];
    let mut seen = Vec::new();

    let _ = filter(&seq, |s| {
        seen.push(*s);
        true
    });

    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[test]
#[should_panic(expected = "callback failed")]
fn test_callback_panic_propagates() {
    let seq = vec![1, 2, 3];

    let _ = map(&seq, |&n| {
        if n == 2 {
            panic!("callback failed");
        }
        n
    });
}

#[test]
fn test_shared_elements_are_not_copied() {
    use std::rc::Rc;

    let shared = vec![Rc::new(String::from("left")), Rc::new(String::from("right"))];

    let kept = filter(&shared, |s| s.starts_with('l'));

    assert!(Rc::ptr_eq(&kept[0], &shared[0]));
    assert_eq!(Rc::strong_count(&shared[0]), 2);
}
