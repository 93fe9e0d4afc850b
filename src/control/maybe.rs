//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Just(T)` or
//! `Nothing`. Unlike `std::option::Option`, every combinator here is defined
//! through the total eliminator [`Maybe::fold`], and the only way to
//! collapse an absent input into `Nothing` is an explicit conversion from
//! `Option<T>`.
//!
//! # Examples
//!
//! ```rust
//! use funclib::control::Maybe;
//!
//! let present: Maybe<i32> = Maybe::some(21);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! assert_eq!(present.map(|n| n * 2), Maybe::some(42));
//! assert_eq!(absent.map(|n| n * 2), Maybe::none());
//!
//! // An absent input collapses to Nothing
//! let collapsed: Maybe<&str> = Maybe::from_nullable(None);
//! assert!(collapsed.is_none());
//!
//! // fold is the total eliminator
//! let rendered = present.fold(|| "NONE".to_string(), |n| (n * 5).to_string());
//! assert_eq!(rendered, "105");
//! ```

use std::fmt;

use super::validation::Validation;
use crate::error::{ConstructionError, Error, Result};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// Two `Maybe`s are equal when both are `Nothing`, or when both are `Just`
/// with equal payloads. `Nothing` never equals a `Just`.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use funclib::control::Maybe;
///
/// let parsed: Maybe<i32> = "42".parse().ok().into();
/// assert_eq!(parsed, Maybe::some(42));
///
/// let failed: Maybe<i32> = "abc".parse().ok().into();
/// assert_eq!(failed, Maybe::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Maybe<T> {
    /// The absent state. Carries no payload.
    #[default]
    Nothing,
    /// The present state, wrapping a value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Nothing
    }

    /// Wraps a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::AbsentValue`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Maybe;
    /// use funclib::error::ConstructionError;
    ///
    /// assert_eq!(Maybe::try_some(Some(3)), Ok(Maybe::some(3)));
    /// assert_eq!(
    ///     Maybe::<i32>::try_some(None),
    ///     Err(ConstructionError::AbsentValue { type_name: "Maybe" })
    /// );
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self> {
        value
            .map(Self::Just)
            .ok_or(ConstructionError::AbsentValue { type_name: "Maybe" })
    }

    /// Converts an optional value, collapsing `None` into `Nothing`.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Returns the first element of an iterator, or `Nothing` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Maybe;
    ///
    /// assert_eq!(Maybe::first_of(vec![3, 4]), Maybe::some(3));
    /// assert_eq!(Maybe::first_of(Vec::<i32>::new()), Maybe::none());
    /// ```
    pub fn first_of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_nullable(values.into_iter().next())
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Maybe` by invoking exactly one of two functions.
    ///
    /// `none_function` runs for `Nothing`, `some_function` receives the value
    /// of a `Just`. The other function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Maybe;
    ///
    /// let describe = |value: Maybe<i32>| value.fold(|| "NONE".to_string(), |n| n.to_string());
    /// assert_eq!(describe(Maybe::some(3)), "3");
    /// assert_eq!(describe(Maybe::none()), "NONE");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, none_function: F, some_function: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Nothing => none_function(),
            Self::Just(value) => some_function(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the present value.
    ///
    /// `function` is not invoked when the value is absent.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(Maybe::none, |value| Maybe::some(function(value)))
    }

    /// Applies a function returning a `Maybe` and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).flat_map(half).flat_map(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).flat_map(half).flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.fold(Maybe::none, function)
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Binds a dependent computation and projects both values into a result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Maybe;
    ///
    /// let result = Maybe::some(3).flat_map_with(|n| Maybe::some(n * 10), |n, m| n + m);
    /// assert_eq!(result, Maybe::some(33));
    /// ```
    pub fn flat_map_with<U, R, F, P>(self, function: F, project: P) -> Maybe<R>
    where
        F: FnOnce(&T) -> Maybe<U>,
        P: FnOnce(T, U) -> R,
    {
        self.fold(Maybe::none, |value| {
            function(&value).fold(Maybe::none, |other| Maybe::some(project(value, other)))
        })
    }

    /// Runs an action on the present value, discarding its result.
    #[inline]
    pub fn for_each<F>(self, action: F) -> Maybe<()>
    where
        F: FnOnce(T),
    {
        self.map(action)
    }

    /// Keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.fold(Self::none, |value| {
            if predicate(&value) {
                Self::some(value)
            } else {
                Self::none()
            }
        })
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the present value or `default`.
    #[inline]
    pub fn get_value_or_else(self, default: T) -> T {
        self.fold(|| default, |value| value)
    }

    /// Returns the present value or computes one with `default_function`.
    ///
    /// `default_function` only runs when the value is absent.
    #[inline]
    pub fn get_value_or_else_with<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(default_function, |value| value)
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        self.fold(|| alternative, Self::some)
    }

    /// Returns `self` if present, otherwise the result of `alternative_function`.
    #[inline]
    pub fn or_else_with<F>(self, alternative_function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.fold(alternative_function, Self::some)
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Validation`], using `error_function` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::{Maybe, Validation};
    /// use funclib::error::Error;
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// assert_eq!(
    ///     missing.to_validation(|| Error::new("missing")),
    ///     Validation::invalid(Error::new("missing"))
    /// );
    /// ```
    pub fn to_validation<F>(self, error_function: F) -> Validation<T>
    where
        F: FnOnce() -> Error,
    {
        self.fold(
            || Validation::invalid(error_function()),
            Validation::valid,
        )
    }

    /// Iterates over the present value (zero or one element).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::<&T>::from(self.as_ref()).into_iter()
    }
}

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The result is present only when both the function and the argument
    /// are present. Curried closures allow multi-argument application to be
    /// chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Maybe;
    ///
    /// let multiply = |a: i32| move |b: i32| a * b;
    ///
    /// let product = Maybe::some(multiply).apply(Maybe::some(2)).apply(Maybe::some(3));
    /// assert_eq!(product, Maybe::some(6));
    ///
    /// let missing = Maybe::some(multiply).apply(Maybe::none()).apply(Maybe::some(3));
    /// assert_eq!(missing, Maybe::none());
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.fold(Maybe::none, |function| argument.map(function))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Some({value})"),
            Self::Nothing => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option`, collapsing `None` into `Nothing`.
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.fold(|| None, Some)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}
