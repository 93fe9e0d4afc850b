//! Validation type - a value or the errors that prevented it.
//!
//! `Validation<T>` is either `Valid(T)` or `Invalid(ErrorList)`. It has two
//! composition operators with deliberately different failure policies:
//!
//! - [`Validation::flat_map`] (monadic) short-circuits: the first `Invalid`
//!   wins and the continuation never runs.
//! - [`Validation::apply`] / [`Validation::map2`] (applicative) accumulate:
//!   when both sides are `Invalid` their error lists are concatenated,
//!   function side first.
//!
//! Use `flat_map` when a step depends on the previous value, and `apply` to
//! combine independent checks so that every failure is reported.
//!
//! # Examples
//!
//! ```rust
//! use funclib::control::Validation;
//! use funclib::error::Error;
//!
//! fn validate_name(name: &str) -> Validation<String> {
//!     if name.is_empty() {
//!         Validation::invalid(Error::new("name is empty"))
//!     } else {
//!         Validation::valid(name.to_string())
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<u32> {
//!     u32::try_from(age).map_or_else(
//!         |_| Validation::invalid(Error::new("age is negative")),
//!         Validation::valid,
//!     )
//! }
//!
//! let person = |name: String| move |age: u32| format!("{name} is {age}");
//!
//! // Independent checks accumulate every error
//! let both_bad = Validation::valid(person)
//!     .apply(validate_name(""))
//!     .apply(validate_age(-1));
//! assert_eq!(both_bad.to_string(), "Invalid([name is empty, age is negative])");
//!
//! // Dependent steps stop at the first error
//! let chained = validate_name("").flat_map(|_| validate_age(-1));
//! assert_eq!(chained.to_string(), "Invalid([name is empty])");
//!
//! let ok = Validation::valid(person)
//!     .apply(validate_name("Ada"))
//!     .apply(validate_age(36));
//! assert_eq!(ok, Validation::valid("Ada is 36".to_string()));
//! ```

use std::fmt;

use crate::error::{Error, ErrorList, Result};
use crate::typeclass::Semigroup;

/// A value that validated successfully, or the ordered errors explaining why not.
///
/// An `Invalid` always carries at least one error: [`ErrorList`] cannot be
/// built empty. A `Valid` carries no errors.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Validation<T> {
    /// The validated value.
    Valid(T),
    /// The errors that prevented validation, in the order they were reported.
    Invalid(ErrorList),
}

impl<T> Validation<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a valid value.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value with a single error.
    #[inline]
    pub fn invalid(error: Error) -> Self {
        Self::Invalid(ErrorList::new(error))
    }

    /// Creates an invalid value from an existing error list.
    #[inline]
    pub const fn invalid_list(errors: ErrorList) -> Self {
        Self::Invalid(errors)
    }

    /// Creates an invalid value from any number of errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyErrors`](crate::error::ConstructionError::EmptyErrors)
    /// when `errors` is empty; an invalid validation without errors is never produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Validation;
    /// use funclib::error::{ConstructionError, Error};
    ///
    /// let invalid = Validation::<i32>::invalid_all([Error::new("a"), Error::new("b")]).unwrap();
    /// assert_eq!(invalid.to_string(), "Invalid([a, b])");
    ///
    /// let empty = Validation::<i32>::invalid_all(Vec::new());
    /// assert_eq!(empty, Err(ConstructionError::EmptyErrors));
    /// ```
    pub fn invalid_all<I>(errors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        ErrorList::try_from_iter(errors).map(Self::Invalid)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if this is `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the errors of an `Invalid`, or `None` for a `Valid`.
    #[inline]
    pub const fn errors(&self) -> Option<&ErrorList> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the validation by invoking exactly one of two functions.
    ///
    /// `invalid_function` receives the full, ordered error list.
    #[inline]
    pub fn fold<R, F, G>(self, invalid_function: F, valid_function: G) -> R
    where
        F: FnOnce(ErrorList) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Valid(value) => valid_function(value),
            Self::Invalid(errors) => invalid_function(errors),
        }
    }

    // =========================================================================
    // Monadic Composition (short-circuit)
    // =========================================================================

    /// Applies a function to the valid value; errors pass through unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(Validation::Invalid, |value| Validation::Valid(function(value)))
    }

    /// Chains a validation that depends on the valid value.
    ///
    /// If `self` is `Invalid`, its errors propagate unchanged and `function`
    /// is never invoked. Errors are **not** accumulated here; use
    /// [`Validation::apply`] for independent checks.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Validation<U>
    where
        F: FnOnce(T) -> Validation<U>,
    {
        self.fold(Validation::Invalid, function)
    }

    /// Alias for [`Validation::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Validation<U>
    where
        F: FnOnce(T) -> Validation<U>,
    {
        self.flat_map(function)
    }

    /// Binds a dependent validation and projects both values into a result.
    ///
    /// Short-circuits like [`Validation::flat_map`].
    pub fn flat_map_with<U, R, F, P>(self, function: F, project: P) -> Validation<R>
    where
        F: FnOnce(&T) -> Validation<U>,
        P: FnOnce(T, U) -> R,
    {
        self.fold(Validation::Invalid, |value| {
            function(&value).map(|other| project(value, other))
        })
    }

    /// Runs an action on the valid value, discarding its result.
    #[inline]
    pub fn for_each<F>(self, action: F) -> Validation<()>
    where
        F: FnOnce(T),
    {
        self.map(action)
    }

    /// Runs an action on a reference to the valid value and returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Validation;
    ///
    /// let mut seen = Vec::new();
    /// let value = Validation::valid(3).tap(|n| seen.push(*n)).map(|n| n + 1);
    /// assert_eq!(value, Validation::valid(4));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Valid(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Applicative Composition (accumulate)
    // =========================================================================

    /// Combines two independent validations with a binary function.
    ///
    /// When both are `Invalid`, the result carries `self`'s errors followed
    /// by `other`'s. `function` only runs when both are `Valid`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Validation;
    /// use funclib::error::Error;
    ///
    /// let first: Validation<i32> = Validation::invalid(Error::new("e1"));
    /// let second: Validation<i32> = Validation::invalid(Error::new("e2"));
    /// assert_eq!(first.map2(second, |a, b| a + b).to_string(), "Invalid([e1, e2])");
    ///
    /// assert_eq!(Validation::valid(1).map2(Validation::valid(2), |a, b| a + b), Validation::valid(3));
    /// ```
    pub fn map2<U, R, F>(self, other: Validation<U>, function: F) -> Validation<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid(function(left, right)),
            (Self::Valid(_), Validation::Invalid(errors))
            | (Self::Invalid(errors), Validation::Valid(_)) => Validation::Invalid(errors),
            (Self::Invalid(left_errors), Validation::Invalid(right_errors)) => {
                Validation::Invalid(left_errors.combine(right_errors))
            }
        }
    }

    /// Collects independent validations, accumulating every error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Validation;
    /// use funclib::error::Error;
    ///
    /// let all = Validation::sequence(vec![Validation::valid(1), Validation::valid(2)]);
    /// assert_eq!(all, Validation::valid(vec![1, 2]));
    ///
    /// let some_bad = Validation::sequence(vec![
    ///     Validation::invalid(Error::new("first")),
    ///     Validation::valid(2),
    ///     Validation::invalid(Error::new("third")),
    /// ]);
    /// assert_eq!(some_bad.errors().map(ToString::to_string), Some("[first, third]".to_string()));
    /// ```
    pub fn sequence<I>(validations: I) -> Validation<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        validations
            .into_iter()
            .fold(Validation::Valid(Vec::new()), |accumulated, next| {
                accumulated.map2(next, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }

    // =========================================================================
    // Fallbacks and Conversion
    // =========================================================================

    /// Returns the valid value or `default`.
    #[inline]
    pub fn get_value_or_else(self, default: T) -> T {
        self.fold(|_| default, |value| value)
    }

    /// Returns the valid value or computes one with `default_function`.
    #[inline]
    pub fn get_value_or_else_with<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|_| default_function(), |value| value)
    }

    /// Converts into a `Result`, with the error list on the `Err` side.
    #[inline]
    pub fn into_result(self) -> std::result::Result<T, ErrorList> {
        self.fold(Err, Ok)
    }

    /// Iterates over the valid value, yielding nothing when invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::Validation;
    /// use funclib::error::Error;
    ///
    /// assert_eq!(Validation::valid(3).iter().sum::<i32>(), 3);
    /// assert_eq!(Validation::<i32>::invalid(Error::new("e")).iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
        .into_iter()
    }
}

impl<F> Validation<F> {
    /// Applies a validated function to a validated argument.
    ///
    /// | function  | argument  | result                                   |
    /// |-----------|-----------|------------------------------------------|
    /// | `Valid`   | `Valid`   | `Valid(function(argument))`              |
    /// | `Valid`   | `Invalid` | the argument's errors                    |
    /// | `Invalid` | `Valid`   | the function's errors                    |
    /// | `Invalid` | `Invalid` | function errors followed by argument errors |
    ///
    /// The wrapped function is invoked only in the first row.
    #[inline]
    pub fn apply<A, B>(self, argument: Validation<A>) -> Validation<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map2(argument, |function, value| function(value))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Validation<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(errors) => write!(formatter, "Invalid({errors})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Error> for Validation<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::invalid(error)
    }
}

impl<T> From<ErrorList> for Validation<T> {
    #[inline]
    fn from(errors: ErrorList) -> Self {
        Self::Invalid(errors)
    }
}

impl<T> From<Validation<T>> for std::result::Result<T, ErrorList> {
    #[inline]
    fn from(validation: Validation<T>) -> Self {
        validation.into_result()
    }
}

impl<T> IntoIterator for Validation<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Validation<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn error(message: &str) -> Error {
        Error::new(message)
    }

    #[rstest]
    fn apply_calls_function_only_when_both_sides_are_valid() {
        let calls = Cell::new(0);
        let counting = |n: i32| {
            calls.set(calls.get() + 1);
            n
        };

        let skipped = Validation::valid(counting).apply(Validation::<i32>::invalid(error("x")));
        assert_eq!(skipped, Validation::invalid(error("x")));
        assert_eq!(calls.get(), 0);

        let applied = Validation::valid(counting).apply(Validation::valid(5));
        assert_eq!(applied, Validation::valid(5));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn flat_map_keeps_only_first_errors() {
        let result = Validation::<i32>::invalid(error("first"))
            .flat_map(|_| Validation::<i32>::invalid(error("second")));
        assert_eq!(result, Validation::invalid(error("first")));
    }

    #[rstest]
    #[case(Validation::valid(7), 7)]
    #[case(Validation::invalid(Error::new("bad")), 0)]
    fn get_value_or_else_falls_back(#[case] value: Validation<i32>, #[case] expected: i32) {
        assert_eq!(value.get_value_or_else(0), expected);
    }

    #[rstest]
    fn errors_exposes_full_list() {
        let invalid = Validation::<()>::invalid_list(ErrorList::new(error("a")).with(error("b")));
        let messages: Vec<&str> = invalid
            .errors()
            .map(|errors| errors.iter().map(Error::message).collect())
            .unwrap_or_default();
        assert_eq!(messages, vec!["a", "b"]);
        assert!(Validation::valid(1).errors().is_none());
    }

    #[rstest]
    fn iterates_zero_or_one_values() {
        let valid = Validation::valid(4);
        let invalid = Validation::<i32>::invalid(error("x"));

        assert_eq!(valid.iter().collect::<Vec<_>>(), vec![&4]);
        assert_eq!(invalid.iter().next(), None);
        assert_eq!(valid.into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(invalid.into_iter().count(), 0);
    }

    #[rstest]
    fn borrowed_validation_works_in_for_loop() {
        let valid = Validation::valid(String::from("ok"));
        let mut seen = Vec::new();
        for value in &valid {
            seen.push(value.len());
        }
        assert_eq!(seen, vec![2]);
        assert!(valid.is_valid());
    }
}
