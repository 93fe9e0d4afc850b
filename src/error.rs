//! Error descriptors shared by the control structures.
//!
//! - [`Error`]: an immutable, message-only failure used by [`Validation`](crate::control::Validation)
//! - [`ErrorList`]: an ordered, never-empty sequence of [`Error`]s
//! - [`ConstructionError`]: returned when a value is built from missing input
//!
//! # Examples
//!
//! ```rust
//! use funclib::error::{Error, ErrorList};
//! use funclib::typeclass::Semigroup;
//!
//! let first = ErrorList::new(Error::new("name is empty"));
//! let second = ErrorList::new(Error::new("age is negative"));
//!
//! let combined = first.combine(second);
//! assert_eq!(combined.len(), 2);
//! assert_eq!(combined.to_string(), "[name is empty, age is negative]");
//! ```

use std::fmt;

use smallvec::{SmallVec, smallvec};

/// Result alias for fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, ConstructionError>;

/// Misuse of a constructor that would otherwise produce a corrupt value.
///
/// Rust's type system already rules out most of these cases (a `T` is never
/// null), so this error only surfaces from the `try_*` and `*_all`
/// constructors that accept input which can express absence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// A present value was required but the input was absent.
    #[error("cannot construct `{type_name}` from an absent value")]
    AbsentValue {
        /// The name of the type that was being constructed.
        type_name: &'static str,
    },
    /// An invalid validation was requested with no errors.
    #[error("an invalid validation requires at least one error")]
    EmptyErrors,
}

/// An immutable failure descriptor carrying a message.
///
/// # Examples
///
/// ```rust
/// use funclib::error::Error;
///
/// let error = Error::new("must be positive");
/// assert_eq!(error.message(), "must be positive");
/// assert_eq!(error.to_string(), "must be positive");
///
/// let converted: Error = "must be positive".into();
/// assert_eq!(converted, error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    message: String,
}

impl Error {
    /// Creates an error with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message of this error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// An ordered sequence holding at least one [`Error`].
///
/// The only way to obtain an `ErrorList` is from a first error or from a
/// non-empty iterator, so an invalid [`Validation`](crate::control::Validation)
/// can never be error-free.
///
/// Combining two lists (see [`Semigroup`](crate::typeclass::Semigroup))
/// concatenates them, keeping the receiver's errors first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorList {
    errors: SmallVec<[Error; 1]>,
}

#[allow(clippy::len_without_is_empty)]
impl ErrorList {
    /// Creates a list containing a single error.
    #[inline]
    pub fn new(first: Error) -> Self {
        Self {
            errors: smallvec![first],
        }
    }

    /// Creates a list from an iterator of errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyErrors`] if the iterator yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::error::{ConstructionError, Error, ErrorList};
    ///
    /// let list = ErrorList::try_from_iter([Error::new("a"), Error::new("b")]).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// let empty = ErrorList::try_from_iter(Vec::<Error>::new());
    /// assert_eq!(empty, Err(ConstructionError::EmptyErrors));
    /// ```
    pub fn try_from_iter<I>(errors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: SmallVec<[Error; 1]> = errors.into_iter().collect();
        if errors.is_empty() {
            Err(ConstructionError::EmptyErrors)
        } else {
            Ok(Self { errors })
        }
    }

    /// Returns a new list with `error` appended.
    #[must_use]
    pub fn with(mut self, error: Error) -> Self {
        self.errors.push(error);
        self
    }

    /// Appends every error of `other`, preserving order.
    pub(crate) fn append(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of errors. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the first error.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.errors[0]
    }

    /// Returns the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    /// Iterates over the errors in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Converts the list into a `Vec`.
    pub fn into_vec(self) -> Vec<Error> {
        self.errors.into_vec()
    }
}

impl From<Error> for ErrorList {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{error}")?;
        }
        formatter.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_list_keeps_insertion_order() {
        let list = ErrorList::new(Error::new("first"))
            .with(Error::new("second"))
            .with(Error::new("third"));

        let messages: Vec<&str> = list.iter().map(Error::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(list.first().message(), "first");
    }

    #[rstest]
    fn error_list_append_extends_in_order() {
        let mut list = ErrorList::new(Error::new("a"));
        list.append(ErrorList::new(Error::new("b")).with(Error::new("c")));
        assert_eq!(list.to_string(), "[a, b, c]");
    }

    #[rstest]
    #[case(ConstructionError::EmptyErrors, "an invalid validation requires at least one error")]
    #[case(
        ConstructionError::AbsentValue { type_name: "Maybe" },
        "cannot construct `Maybe` from an absent value"
    )]
    fn construction_error_messages(#[case] error: ConstructionError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
