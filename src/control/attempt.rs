//! Attempt type - a value or the fault that replaced it.
//!
//! `Attempt<T>` is either `Success(T)` or `Exception(Fault)`. A [`Fault`] is an
//! opaque, reference-counted error captured at the boundary where a fallible
//! or panicking computation was run. The library never inspects or rewraps it:
//! `map`, `flat_map` and `apply` propagate the *identical* fault object.
//!
//! # Examples
//!
//! ```rust
//! use funclib::control::Attempt;
//!
//! let parsed = Attempt::capture(|| "42".parse::<i32>());
//! assert_eq!(parsed.clone().map(|n| n + 1), Attempt::success(43));
//!
//! let failed = Attempt::capture(|| "forty-two".parse::<i32>());
//! let message = failed.fold(|fault| fault.message(), |n| n.to_string());
//! assert_eq!(message, "invalid digit found in string");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// An opaque, shareable captured error.
///
/// Cloning a `Fault` shares the same underlying error; [`Fault::ptr_eq`]
/// tells whether two faults are the same captured object.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Fault {
    /// Captures an error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Captures an already boxed error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
        }
    }

    /// Returns the rendered message of the captured error.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns `true` if both faults share the same captured error.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Attempts to view the captured error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns the captured error.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Fault").field(&self.inner).finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

/// The fault captured when a computation run by [`Attempt::catch_panic`] panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct PanicFault {
    message: String,
}

impl PanicFault {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A successful value, or the fault captured in its place.
///
/// Two `Success`es are equal when their payloads are equal. Two `Exception`s
/// are equal only when they carry the same captured fault object.
#[derive(Clone, Debug)]
pub enum Attempt<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a captured fault.
    Exception(Fault),
}

impl<T> Attempt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful attempt.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed attempt capturing `error`.
    pub fn exception<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Exception(Fault::new(error))
    }

    /// Creates a failed attempt from an existing fault, keeping its identity.
    #[inline]
    pub const fn from_fault(fault: Fault) -> Self {
        Self::Exception(fault)
    }

    /// Runs a fallible computation and captures its error, if any.
    pub fn capture<E, F>(computation: F) -> Self
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        computation().into()
    }

    /// Runs a computation, capturing a panic as a [`PanicFault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funclib::control::{Attempt, PanicFault};
    ///
    /// let attempt: Attempt<i32> = Attempt::catch_panic(|| panic!("boom"));
    /// let fault = attempt.fault().cloned().unwrap();
    /// assert_eq!(fault.downcast_ref::<PanicFault>().map(PanicFault::message), Some("boom"));
    /// ```
    pub fn catch_panic<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        catch_unwind(AssertUnwindSafe(computation)).map_or_else(
            |payload| Self::exception(PanicFault::from_payload(payload.as_ref())),
            Self::Success,
        )
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is an `Exception`.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        matches!(self, Self::Exception(_))
    }

    /// Returns the captured fault of an `Exception`.
    #[inline]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Exception(fault) => Some(fault),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the attempt by invoking exactly one of two functions.
    #[inline]
    pub fn fold<R, F, G>(self, exception_function: F, success_function: G) -> R
    where
        F: FnOnce(Fault) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Exception(fault) => exception_function(fault),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the successful value; a fault propagates as-is.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(Attempt::Exception, |value| Attempt::Success(function(value)))
    }

    /// Chains an attempt that depends on the successful value.
    ///
    /// An `Exception` short-circuits with the same fault object.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        self.fold(Attempt::Exception, function)
    }

    /// Alias for [`Attempt::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        self.flat_map(function)
    }

    /// Binds a dependent attempt and projects both values into a result.
    pub fn flat_map_with<U, R, F, P>(self, function: F, project: P) -> Attempt<R>
    where
        F: FnOnce(&T) -> Attempt<U>,
        P: FnOnce(T, U) -> R,
    {
        self.fold(Attempt::Exception, |value| {
            function(&value).map(|other| project(value, other))
        })
    }

    /// Runs an action on the successful value, discarding its result.
    #[inline]
    pub fn for_each<F>(self, action: F) -> Attempt<()>
    where
        F: FnOnce(T),
    {
        self.map(action)
    }

    /// Converts into a `Result` with the fault on the `Err` side.
    ///
    /// Use [`Attempt::from_fault`] to go back without rewrapping the fault.
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        self.fold(Err, Ok)
    }
}

impl<F> Attempt<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The function side is checked first. When both sides are exceptions,
    /// only the function side's fault is reported.
    #[inline]
    pub fn apply<A, B>(self, argument: Attempt<A>) -> Attempt<B>
    where
        F: FnOnce(A) -> B,
    {
        self.flat_map(|function| argument.map(function))
    }
}

impl<T: PartialEq> PartialEq for Attempt<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => left == right,
            (Self::Exception(left), Self::Exception(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Exception(fault) => write!(formatter, "Exception({fault})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: StdError + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::exception(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    fn map_propagates_identical_fault() {
        let original: Attempt<i32> = Attempt::exception(Error::new("disk full"));
        let fault = original.fault().cloned().expect("exception carries a fault");

        let mapped = original.map(|n| n.to_string());
        let propagated = mapped.fault().expect("still an exception");
        assert!(propagated.ptr_eq(&fault));
    }

    #[rstest]
    fn exceptions_with_equal_messages_are_not_equal() {
        let first: Attempt<i32> = Attempt::exception(Error::new("same"));
        let second: Attempt<i32> = Attempt::exception(Error::new("same"));
        assert_ne!(first, second);
        assert_eq!(first.clone(), first);
    }

    #[rstest]
    fn downcast_recovers_concrete_error() {
        let attempt: Attempt<()> = Attempt::exception(Error::new("typed"));
        let fault = attempt.fault().cloned().expect("exception");
        assert_eq!(fault.downcast_ref::<Error>(), Some(&Error::new("typed")));
    }

    #[rstest]
    fn display_renders_state() {
        assert_eq!(Attempt::success(3).to_string(), "Success(3)");
        assert_eq!(
            Attempt::<i32>::exception(Error::new("oops")).to_string(),
            "Exception(oops)"
        );
    }
}
