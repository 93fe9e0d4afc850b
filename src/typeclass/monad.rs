//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, where each step may depend
//! on the previous step's value. Every instance in this crate short-circuits:
//! the first failure is returned and later steps never run. This holds for
//! `Validation` too, which only accumulates through `Applicative`.
//!
//! # Laws
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)                                  // left identity
//! m.flat_map(Self::pure) == m                                        // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))      // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::control::Maybe;
//! use funclib::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::some("42").and_then(parse_positive).and_then(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! # }
//! ```

use super::applicative::Applicative;

#[cfg(feature = "control")]
use crate::control::{Attempt, Either, Maybe, Validation};

/// A type class for types that support sequencing dependent computations.
pub trait Monad: Applicative {
    /// Applies a function returning a wrapped value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(feature = "control")]
impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(feature = "control")]
impl<T> Monad for Validation<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<B>
    where
        F: FnOnce(T) -> Validation<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(feature = "control")]
impl<T> Monad for Attempt<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(T) -> Attempt<B>,
    {
        Self::flat_map(self, function)
    }
}
