//! Integration tests for `Maybe<T>`.
//!
//! `Maybe` is either `Just(value)` or `Nothing`. These tests cover:
//! - construction from present and absent inputs
//! - the total `fold` eliminator
//! - short-circuiting of `map`, `flat_map` and `apply`
//! - conversions to `Option`, `Validation` and iterators

#![cfg(feature = "control")]

use std::cell::Cell;

use funclib::control::{Maybe, Validation};
use funclib::error::{ConstructionError, Error};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn some_round_trips_through_fold() {
    let value = Maybe::some(String::from("payload"));
    let recovered = value.fold(|| String::from("missing"), |inner| inner);
    assert_eq!(recovered, "payload");
}

#[rstest]
fn try_some_rejects_absent_value() {
    assert_eq!(
        Maybe::<i32>::try_some(None),
        Err(ConstructionError::AbsentValue { type_name: "Maybe" })
    );
    assert_eq!(Maybe::try_some(Some(3)), Ok(Maybe::some(3)));
}

#[rstest]
#[case(Some(1), Maybe::Just(1))]
#[case(None, Maybe::Nothing)]
fn from_nullable_collapses_absent_to_nothing(#[case] input: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::from_nullable(input), expected);
    assert_eq!(Maybe::from(input), expected);
}

#[rstest]
fn first_of_takes_head() {
    assert_eq!(Maybe::first_of(vec![4, 5, 6]), Maybe::some(4));
    assert_eq!(Maybe::first_of(Vec::<i32>::new()), Maybe::none());
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_invokes_exactly_one_branch() {
    let none_calls = Cell::new(0);
    let some_calls = Cell::new(0);

    Maybe::some(1).fold(|| none_calls.set(none_calls.get() + 1), |_| some_calls.set(some_calls.get() + 1));
    assert_eq!((none_calls.get(), some_calls.get()), (0, 1));

    Maybe::<i32>::none().fold(|| none_calls.set(none_calls.get() + 1), |_| some_calls.set(some_calls.get() + 1));
    assert_eq!((none_calls.get(), some_calls.get()), (1, 1));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_skips_function_on_nothing() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::none().map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(result, Maybe::none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn flat_map_does_not_double_wrap() {
    let halve = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    assert_eq!(Maybe::some(8).flat_map(halve).flat_map(halve), Maybe::some(2));
    assert_eq!(Maybe::some(6).bind(halve).bind(halve), Maybe::none());
}

#[rstest]
fn apply_chains_curried_function() {
    let add = |a: i32| move |b: i32| a + b;
    let sum = Maybe::some(add).apply(Maybe::some(2)).apply(Maybe::some(3));
    assert_eq!(sum, Maybe::some(5));

    let missing = Maybe::some(add).apply(Maybe::none()).apply(Maybe::some(3));
    assert_eq!(missing, Maybe::none());
}

#[rstest]
fn flat_map_with_projects_both_values() {
    let result = Maybe::some(3).flat_map_with(|n| Maybe::some(n * 10), |n, m| (n, m));
    assert_eq!(result, Maybe::some((3, 30)));
}

#[rstest]
#[case(Maybe::Just(4), Maybe::Just(4))]
#[case(Maybe::Just(5), Maybe::Nothing)]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn filter_keeps_matching_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn for_each_runs_action_once_and_returns_unit() {
    let seen = Cell::new(0);
    assert_eq!(Maybe::some(9).for_each(|n| seen.set(n)), Maybe::some(()));
    assert_eq!(seen.get(), 9);
    assert_eq!(Maybe::<i32>::none().for_each(|n| seen.set(n)), Maybe::none());
}

// =============================================================================
// Fallbacks and Conversions
// =============================================================================

#[rstest]
fn fallbacks_only_apply_to_nothing() {
    assert_eq!(Maybe::some(1).get_value_or_else(0), 1);
    assert_eq!(Maybe::none().get_value_or_else(0), 0);
    assert_eq!(Maybe::none().get_value_or_else_with(|| 7), 7);
    assert_eq!(Maybe::none().or_else(Maybe::some(2)), Maybe::some(2));
    assert_eq!(Maybe::some(1).or_else_with(|| Maybe::some(2)), Maybe::some(1));
}

#[rstest]
fn to_validation_uses_error_only_when_absent() {
    assert_eq!(Maybe::some(1).to_validation(|| Error::new("missing")), Validation::valid(1));
    assert_eq!(
        Maybe::<i32>::none().to_validation(|| Error::new("missing")),
        Validation::invalid(Error::new("missing"))
    );
}

#[rstest]
fn iterates_zero_or_one_items() {
    assert_eq!(Maybe::some(1).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(Maybe::<i32>::none().iter().count(), 0);
    let option: Option<i32> = Maybe::some(2).into();
    assert_eq!(option, Some(2));
}

#[rstest]
#[case(Maybe::Just(42), "Some(42)")]
#[case(Maybe::Nothing, "None")]
fn display_renders_state(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}
