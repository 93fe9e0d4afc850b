//! Immutable sum types for explicit failure and alternative handling.
//!
//! This module provides the control structures of the crate:
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a value that is one of two alternatives
//! - [`Validation`]: a value or an accumulated list of errors
//! - [`Attempt`]: a value or the fault captured in its place
//! - [`Union2`] to [`Union5`]: closed unions tagged by position
//!
//! Every type is immutable once constructed. Each one is eliminated with
//! `fold`, which invokes exactly one of its handlers.
//!
//! # Examples
//!
//! ## Short-circuiting versus accumulating
//!
//! ```rust
//! use funclib::control::{Either, Validation};
//! use funclib::error::Error;
//!
//! // Either stops at the first Left.
//! let first: Either<&str, i32> = Either::Left("first");
//! let second: Either<&str, i32> = Either::Left("second");
//! assert_eq!(first.flat_map(|_| second), Either::Left("first"));
//!
//! // Validation keeps every error when combined applicatively.
//! let add = |x: i32| move |y: i32| x + y;
//! let left: Validation<i32> = Validation::invalid(Error::new("left"));
//! let right: Validation<i32> = Validation::invalid(Error::new("right"));
//! let combined = left.map(add).apply(right);
//! assert_eq!(combined.to_string(), "Invalid([left, right])");
//! ```
//!
//! ## Capturing failures
//!
//! ```rust
//! use funclib::control::Attempt;
//!
//! let attempt = Attempt::capture(|| "12".parse::<u8>()).map(|n| n * 2);
//! assert_eq!(attempt.into_result().ok(), Some(24));
//! ```

mod attempt;
mod either;
mod maybe;
mod union;
mod validation;

pub use attempt::{Attempt, Fault, PanicFault};
pub use either::Either;
pub use maybe::Maybe;
pub use union::{At1, At2, At3, At4, At5, Inject, Union2, Union3, Union4, Union5};
pub use validation::Validation;
