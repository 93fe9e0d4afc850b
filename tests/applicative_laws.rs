//! Property-based tests for Applicative laws.
//!
//! - **Identity**: `pure(id).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Map2 consistency**: `a.map2(b, f) == a.fmap(curried f).apply(b)`
//!
//! `Validation` additionally accumulates errors from both sides, function
//! side first.

#![cfg(feature = "control")]

use funclib::control::{Attempt, Either, Maybe, Validation};
use funclib::error::{Error, ErrorList};
use funclib::typeclass::{Applicative, Functor};
use proptest::prelude::*;

fn error_list(messages: Vec<String>) -> ErrorList {
    ErrorList::try_from_iter(messages.into_iter().map(Error::new)).expect("at least one message")
}

fn validation_strategy() -> impl Strategy<Value = Validation<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::valid),
        prop::collection::vec("[a-z]{1,6}", 1..4)
            .prop_map(|messages| Validation::invalid_list(error_list(messages))),
    ]
}

fn identity_i32(n: i32) -> i32 {
    n
}

fn triple(n: i32) -> i32 {
    n.wrapping_mul(3)
}

proptest! {
    #[test]
    fn prop_maybe_identity(value in any::<Option<i32>>()) {
        let value = Maybe::from(value);
        let lifted = <Maybe<()>>::pure(identity_i32 as fn(i32) -> i32);
        prop_assert_eq!(lifted.apply(value), value);
    }

    #[test]
    fn prop_maybe_homomorphism(x in any::<i32>()) {
        let left = <Maybe<()>>::pure(triple as fn(i32) -> i32).apply(<Maybe<()>>::pure(x));
        prop_assert_eq!(left, Maybe::some(triple(x)));
    }

    #[test]
    fn prop_either_homomorphism(x in any::<i32>()) {
        let function: Either<String, fn(i32) -> i32> = Either::Right(triple);
        let left = function.apply(Either::Right(x));
        prop_assert_eq!(left, Either::Right(triple(x)));
    }

    #[test]
    fn prop_either_first_left_wins(a in "[a-z]{1,4}", b in "[a-z]{1,4}") {
        let function: Either<String, fn(i32) -> i32> = Either::Left(a.clone());
        let left = function.apply(Either::<String, i32>::Left(b));
        prop_assert_eq!(left, Either::Left(a));
    }

    #[test]
    fn prop_validation_identity(value in validation_strategy()) {
        let lifted = <Validation<()>>::pure(identity_i32 as fn(i32) -> i32);
        prop_assert_eq!(lifted.apply(value.clone()), value);
    }

    #[test]
    fn prop_validation_homomorphism(x in any::<i32>()) {
        let left = <Validation<()>>::pure(triple as fn(i32) -> i32).apply(<Validation<()>>::pure(x));
        prop_assert_eq!(left, Validation::valid(triple(x)));
    }

    #[test]
    fn prop_validation_map2_consistent_with_apply(
        a in validation_strategy(),
        b in validation_strategy(),
    ) {
        let via_map2 = a.clone().map2(b.clone(), i32::wrapping_add);
        let via_apply = a
            .fmap(|x| move |y: i32| x.wrapping_add(y))
            .apply(b);
        prop_assert_eq!(via_map2, via_apply);
    }

    #[test]
    fn prop_validation_accumulates_function_side_first(
        left in prop::collection::vec("[a-z]{1,6}", 1..4),
        right in prop::collection::vec("[a-z]{1,6}", 1..4),
    ) {
        let function: Validation<fn(i32) -> i32> = Validation::invalid_list(error_list(left.clone()));
        let argument: Validation<i32> = Validation::invalid_list(error_list(right.clone()));

        let expected: Vec<String> = left.into_iter().chain(right).collect();
        let actual: Vec<String> = match function.apply(argument) {
            Validation::Invalid(errors) => errors.iter().map(|e| e.message().to_string()).collect(),
            Validation::Valid(_) => Vec::new(),
        };
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_attempt_homomorphism(x in any::<i32>()) {
        let left = <Attempt<()>>::pure(triple as fn(i32) -> i32).apply(<Attempt<()>>::pure(x));
        prop_assert_eq!(left, Attempt::success(triple(x)));
    }
}
