//! Type class traits shared by the control structures.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation via GATs
//! - [`Functor`]: mapping over the held value
//! - [`Applicative`]: combining independent values in a context
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`]: associative combination, used for error accumulation
//!
//! The control structures also expose the same operations as inherent
//! methods (`map`, `apply`, `flat_map`), so the traits are only needed when
//! writing code that is generic over the container.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::control::{Attempt, Maybe};
//! use funclib::typeclass::{Applicative, Monad};
//!
//! fn add_both<M>(left: M, right: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     left.map2(right, |a, b| a + b)
//! }
//!
//! assert_eq!(add_both(Maybe::some(1), Maybe::some(2)), Maybe::some(3));
//! assert_eq!(add_both(Attempt::success(1), Attempt::success(2)), Attempt::success(3));
//! # }
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;
