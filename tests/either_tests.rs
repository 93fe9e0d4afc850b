//! Integration tests for `Either<L, R>`.
//!
//! Either is right-biased: `map`, `flat_map` and `apply` act on `Right`
//! and pass a `Left` through unchanged.

#![cfg(feature = "control")]

use std::cell::Cell;

use funclib::control::Either;
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn constructors_select_branch() {
    let left: Either<i32, String> = Either::left_of(42);
    let right: Either<i32, String> = Either::right_of("hello".to_string());
    assert!(left.is_left() && !left.is_right());
    assert!(right.is_right() && !right.is_left());
}

#[rstest]
fn extraction_follows_branch() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.clone().left(), Some(42));
    assert_eq!(left.right(), None);

    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.right_ref(), Some(&"hello".to_string()));
    assert_eq!(right.into_options(), (None, Some("hello".to_string())));
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_on_left_invokes_only_left_handler() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let value: Either<i32, &str> = Either::Left(7);

    let seen = value.fold(
        |v| {
            left_calls.set(left_calls.get() + 1);
            v
        },
        |_| {
            right_calls.set(right_calls.get() + 1);
            0
        },
    );

    assert_eq!(seen, 7);
    assert_eq!((left_calls.get(), right_calls.get()), (1, 0));
}

#[rstest]
fn fold_on_right_invokes_only_right_handler() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let value: Either<i32, &str> = Either::Right("r");

    let seen = value.fold(
        |_| {
            left_calls.set(left_calls.get() + 1);
            ""
        },
        |v| {
            right_calls.set(right_calls.get() + 1);
            v
        },
    );

    assert_eq!(seen, "r");
    assert_eq!((left_calls.get(), right_calls.get()), (0, 1));
}

// =============================================================================
// Mapping and Binding
// =============================================================================

#[rstest]
fn map_left_and_bimap_target_their_sides() {
    let left: Either<i32, String> = Either::Left(2);
    assert_eq!(left.clone().map_left(|n| n * 10), Either::Left(20));
    assert_eq!(left.bimap(|n| n + 1, |s| s.len()), Either::Left(3));
}

#[rstest]
fn flat_map_short_circuits_without_invoking() {
    let calls = Cell::new(0);
    let left: Either<&str, i32> = Either::Left("stop");
    let result = left.flat_map(|n| {
        calls.set(calls.get() + 1);
        Either::Right(n + 1)
    });
    assert_eq!(result, Either::Left("stop"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn flat_map_with_projects_both_rights() {
    let value: Either<&str, i32> = Either::Right(4);
    let result = value.flat_map_with(|n| Either::Right(n * 2), |n, m| n + m);
    assert_eq!(result, Either::Right(12));
}

#[rstest]
fn apply_uses_argument_left_when_function_present() {
    fn increment(n: i32) -> i32 {
        n + 1
    }

    let function: Either<&str, fn(i32) -> i32> = Either::Right(increment as fn(i32) -> i32);
    assert_eq!(function.apply(Either::Left("no argument")), Either::Left("no argument"));
    assert_eq!(function.apply(Either::Right(1)), Either::Right(2));
}

#[rstest]
fn for_each_returns_unit_right() {
    let seen = Cell::new(0);
    let value: Either<&str, i32> = Either::Right(5);
    assert_eq!(value.for_each(|n| seen.set(n)), Either::Right(()));
    assert_eq!(seen.get(), 5);
}

#[rstest]
fn swap_exchanges_sides() {
    let value: Either<i32, &str> = Either::Left(1);
    assert_eq!(value.swap(), Either::Right(1));
}
