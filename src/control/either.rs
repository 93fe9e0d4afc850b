//! Either type - a value that is one of two alternatives.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. Combinators are right-biased:
//! `map` and `flat_map` act on the `Right` value, and a `Left` passes through
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use funclib::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(20);
//! let failed: Either<String, i32> = Either::Left("not a number".to_string());
//!
//! assert_eq!(parsed.clone().map(|n| n + 1), Either::Right(21));
//! assert_eq!(failed.clone().map(|n| n + 1), Either::Left("not a number".to_string()));
//!
//! // Using fold to handle both cases
//! let result = failed.fold(|message| format!("error: {message}"), |n| n.to_string());
//! assert_eq!(result, "error: not a number");
//! ```

use std::fmt;

/// A value that is one of two alternatives.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` represents failure or the first alternative
/// - `Right` represents success or the second alternative
///
/// Equality requires both values to be in the same branch with equal payloads.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use funclib::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let doubled = success.flat_map(|x| Either::Right(x * 2));
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left_of(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right_of(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// Exactly one function is invoked: `left_function` for a `Left`,
    /// `right_function` for a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|x: i32| x.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value, passing a `Left` through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.fold(Either::Left, |value| Either::Right(function(value)))
    }

    /// Applies a function to the left value, passing a `Right` through unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.fold(|value| Either::Left(function(value)), Either::Right)
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        self.fold(
            |value| Either::Left(left_function(value)),
            |value| Either::Right(right_function(value)),
        )
    }

    /// Applies a function returning an `Either` to the right value.
    ///
    /// A `Left` short-circuits: `function` is not invoked and the left value
    /// is rewrapped unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Either;
    ///
    /// fn positive(n: i32) -> Either<String, i32> {
    ///     if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
    /// }
    ///
    /// assert_eq!(Either::Right(3).flat_map(positive), Either::Right(3));
    /// assert_eq!(
    ///     Either::Right(-1).flat_map(positive),
    ///     Either::Left("-1 is not positive".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.fold(Either::Left, function)
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Binds a dependent computation and projects both right values into a result.
    pub fn flat_map_with<T, U, F, P>(self, function: F, project: P) -> Either<L, U>
    where
        F: FnOnce(&R) -> Either<L, T>,
        P: FnOnce(R, T) -> U,
    {
        self.fold(Either::Left, |value| {
            function(&value).fold(Either::Left, |other| Either::Right(project(value, other)))
        })
    }

    /// Runs an action on the right value, discarding its result.
    #[inline]
    pub fn for_each<F>(self, action: F) -> Either<L, ()>
    where
        F: FnOnce(R),
    {
        self.map(action)
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        self.fold(|value| (Some(value), None), |value| (None, Some(value)))
    }
}

impl<L, F> Either<L, F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The function side is checked first: if it is a `Left`, that value is
    /// returned; otherwise the argument's `Left` (if any) is returned.
    #[inline]
    pub fn apply<A, B>(self, argument: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        self.flat_map(|function| argument.map(function))
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}
