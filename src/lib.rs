//! # funclib
//!
//! Immutable sum types and function memoization for Rust.
//!
//! ## Overview
//!
//! This library provides small, composable value wrappers whose only
//! eliminator is a total `fold`. Every other combinator is defined in terms
//! of it, so an inactive branch is never read.
//!
//! - **Control Structures**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Validation`](control::Validation), [`Attempt`](control::Attempt) and
//!   the positional unions [`Union2`](control::Union2) .. [`Union5`](control::Union5)
//! - **Type Classes**: Functor, Applicative, Monad and Semigroup implemented
//!   for every control structure
//! - **Memoization**: [`Memoized`](memo::Memoized) and
//!   [`ConcurrentMemoized`](memo::ConcurrentMemoized) caches around pure functions
//! - **Function Composition**: `compose!`, `pipe!`, `partial!` and helper combinators
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `control`: Sum types (Maybe, Either, Validation, Attempt, Union)
//! - `memo`: Memoizing function wrappers
//! - `fxhash`: Hash memo caches with `rustc-hash`
//! - `ahash`: Hash memo caches with `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::prelude::*;
//!
//! let validated = Validation::valid(|name: String| move |age: u32| format!("{name} ({age})"))
//!     .apply(Validation::invalid(Error::new("name is empty")))
//!     .apply(Validation::<u32>::invalid(Error::new("age is negative")));
//!
//! assert_eq!(
//!     validated.to_string(),
//!     "Invalid([name is empty, age is negative])"
//! );
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funclib::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::error::{ConstructionError, Error, ErrorList};

    #[cfg(feature = "memo")]
    pub use crate::memo::*;
}

#[cfg(feature = "control")]
pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "control")]
pub use error::Result;
