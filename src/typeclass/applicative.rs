//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`, lifting a plain value into the context
//! - `map2`/`map3`, combining independent values in the context
//! - `apply`, applying a wrapped function to a wrapped argument
//!
//! The instances differ in how they treat two failures. `Maybe`, `Either`
//! and `Attempt` report the function side's failure and ignore the argument.
//! `Validation` reports both, concatenating the function side's errors
//! before the argument's.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                          // identity
//! pure(f).apply(pure(x)) == pure(f(x))               // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)        // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::control::Validation;
//! use funclib::error::Error;
//! use funclib::typeclass::Applicative;
//!
//! let name: Validation<&str> = Validation::invalid(Error::new("name is empty"));
//! let age: Validation<u8> = Validation::invalid(Error::new("age is missing"));
//!
//! let person = name.map2(age, |name, age| format!("{name} ({age})"));
//! assert_eq!(person.to_string(), "Invalid([name is empty, age is missing])");
//! # }
//! ```

use super::functor::Functor;

#[cfg(feature = "control")]
use crate::control::{Attempt, Either, Maybe, Validation};

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "control")] {
    /// use funclib::control::Maybe;
    /// use funclib::typeclass::Applicative;
    ///
    /// let value: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(value, Maybe::some(42));
    /// # }
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values in the context with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in the context to a value held in the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _) | (_, Either::Left(error), _) | (_, _, Either::Left(error)) => {
                Either::Left(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

// =============================================================================
// Validation<T> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T> Applicative for Validation<T> {
    #[inline]
    fn pure<B>(value: B) -> Validation<B> {
        Validation::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<B>, function: F) -> Validation<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validation<B>,
        third: Validation<C>,
        function: F,
    ) -> Validation<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Self::map2(self, second, |a, b| (a, b)).map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<B>) -> Validation<Output>
    where
        T: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

// =============================================================================
// Attempt<T> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T> Applicative for Attempt<T> {
    #[inline]
    fn pure<B>(value: B) -> Attempt<B> {
        Attempt::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Attempt<B>, function: F) -> Attempt<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Attempt::Success(b)) => Attempt::Success(function(a, b)),
            (Self::Exception(fault), _) | (_, Attempt::Exception(fault)) => {
                Attempt::Exception(fault)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Attempt<B>,
        third: Attempt<C>,
        function: F,
    ) -> Attempt<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Attempt::Success(b), Attempt::Success(c)) => {
                Attempt::Success(function(a, b, c))
            }
            (Self::Exception(fault), _, _)
            | (_, Attempt::Exception(fault), _)
            | (_, _, Attempt::Exception(fault)) => Attempt::Exception(fault),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Attempt<B>) -> Attempt<Output>
    where
        T: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    fn maybe_map3_requires_all_present() {
        let all = Maybe::some(1).map3(Maybe::some(2), Maybe::some(3), |a, b, c| a + b + c);
        assert_eq!(all, Maybe::some(6));

        let missing = Maybe::some(1).map3(Maybe::<i32>::none(), Maybe::some(3), |a, b, c| a + b + c);
        assert_eq!(missing, Maybe::none());
    }

    #[rstest]
    fn either_map2_reports_first_left() {
        let left: Either<&str, i32> = Either::Left("first");
        let right: Either<&str, i32> = Either::Left("second");
        assert_eq!(left.map2(right, |a, b| a + b), Either::Left("first"));
    }

    #[rstest]
    fn validation_map3_accumulates_in_argument_order() {
        let first: Validation<i32> = Validation::invalid(Error::new("a"));
        let second: Validation<i32> = Validation::valid(2);
        let third: Validation<i32> = Validation::invalid(Error::new("c"));
        let combined = first.map3(second, third, |a, b, c| a + b + c);
        assert_eq!(combined.to_string(), "Invalid([a, c])");
    }

    #[rstest]
    fn attempt_product_pairs_successes() {
        let paired = Attempt::success(1).product(Attempt::success("one"));
        assert_eq!(paired, Attempt::success((1, "one")));
    }

    #[rstest]
    fn trait_apply_agrees_with_inherent_apply() {
        let function: Validation<fn(i32) -> i32> = Validation::invalid(Error::new("f"));
        let argument: Validation<i32> = Validation::invalid(Error::new("x"));
        let through_trait = <Validation<fn(i32) -> i32> as Applicative>::apply(function, argument);
        assert_eq!(through_trait.to_string(), "Invalid([f, x])");
    }
}
