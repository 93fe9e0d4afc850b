//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if it has an associative
//! `combine: (T, T) -> T`. In this crate the most important semigroup is
//! [`ErrorList`](crate::error::ErrorList), whose `combine` is what lets
//! [`Validation`](crate::control::Validation) accumulate errors.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funclib::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

#[cfg(feature = "control")]
use crate::control::{Maybe, Validation};
#[cfg(feature = "control")]
use crate::error::ErrorList;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values. The receiver's contribution comes first.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values into a new one.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every element of a sequence, left to right.
    ///
    /// Returns `None` for an empty sequence.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// =============================================================================
// ErrorList Implementation
// =============================================================================

/// Concatenation, receiver first.
#[cfg(feature = "control")]
impl Semigroup for ErrorList {
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

// =============================================================================
// Control Structure Implementations
// =============================================================================

/// `Nothing` is neutral; two `Just`s combine their payloads.
#[cfg(feature = "control")]
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Maybe::Just(left), Maybe::Just(right)) => Maybe::Just(left.combine(right)),
            (Maybe::Just(value), Maybe::Nothing) | (Maybe::Nothing, Maybe::Just(value)) => {
                Maybe::Just(value)
            }
            (Maybe::Nothing, Maybe::Nothing) => Maybe::Nothing,
        }
    }
}

/// Two valid payloads combine; otherwise every error is kept, in order.
#[cfg(feature = "control")]
impl<T: Semigroup> Semigroup for Validation<T> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, T::combine)
    }
}
