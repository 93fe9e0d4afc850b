//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the value inside a container without changing the
//! container's shape: `Nothing` stays `Nothing`, a `Left` stays the same
//! `Left`, an `Invalid` keeps its errors and an `Exception` keeps its fault.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::control::Maybe;
//! use funclib::typeclass::Functor;
//!
//! let value: Maybe<i32> = Maybe::some(5);
//! assert_eq!(value.fmap(|n| n.to_string()), Maybe::some("5".to_string()));
//!
//! let missing: Maybe<i32> = Maybe::none();
//! assert_eq!(missing.fmap(|n| n.to_string()), Maybe::none());
//! # }
//! ```

use super::higher::TypeConstructor;

#[cfg(feature = "control")]
use crate::control::{Attempt, Either, Maybe, Validation};

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "control")] {
    /// use funclib::control::Either;
    /// use funclib::typeclass::Functor;
    ///
    /// let value: Either<String, i32> = Either::Right(5);
    /// assert_eq!(value.fmap(|n| n * 2), Either::Right(10));
    /// # }
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the inner value with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

// =============================================================================
// Validation<T> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T> Functor for Validation<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<B>
    where
        F: FnOnce(T) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validation<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors.clone()),
        }
    }
}

// =============================================================================
// Attempt<T> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T> Functor for Attempt<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(T) -> B,
    {
        Self::map(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Attempt<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Attempt::Success(function(value)),
            Self::Exception(fault) => Attempt::Exception(fault.clone()),
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_ref_keeps_original() {
        let value = Maybe::some(String::from("abc"));
        assert_eq!(value.fmap_ref(String::len), Maybe::some(3));
        assert_eq!(value, Maybe::some(String::from("abc")));
    }

    #[rstest]
    fn either_fmap_ref_clones_left() {
        let value: Either<String, i32> = Either::Left("bad".to_string());
        assert_eq!(value.fmap_ref(|n| n + 1), Either::Left("bad".to_string()));
    }

    #[rstest]
    fn validation_void_keeps_errors() {
        let value: Validation<i32> = Validation::invalid(Error::new("e"));
        assert_eq!(value.void(), Validation::<()>::invalid(Error::new("e")));
    }

    #[rstest]
    fn attempt_replace_keeps_fault_identity() {
        let value: Attempt<i32> = Attempt::exception(Error::new("e"));
        let fault = value.fault().cloned().expect("exception");
        let replaced = value.replace("x");
        assert!(replaced.fault().is_some_and(|other| other.ptr_eq(&fault)));
    }
}
