//! Function composition utilities.
//!
//! Macros:
//!
//! - [`compose!`]: compose functions right to left
//! - [`pipe!`]: thread a value through functions left to right
//! - [`partial!`]: fix some arguments of a two- or three-argument function
//!
//! Helper functions: [`identity`], [`constant`], [`flip`], [`negate`],
//! [`tap`] and [`using`].
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::compose::negate;
//! use funclib::control::Maybe;
//! use funclib::{compose, partial, pipe};
//!
//! fn between(low: i32, high: i32, value: i32) -> bool {
//!     (low..=high).contains(&value)
//! }
//!
//! let is_digit = partial!(between, 0, 9, __);
//! let is_not_digit = negate(is_digit);
//! let describe = compose!(|flag: bool| if flag { "other" } else { "digit" }, is_not_digit);
//!
//! assert_eq!(describe(4), "digit");
//! assert_eq!(pipe!(Maybe::some(42), |m: Maybe<i32>| m.filter(|&n| n < 10)), Maybe::none());
//! # }
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Double flip**: `flip(flip(f)) == f`
//! - **Double negation**: `negate(negate(p)) == p`

mod compose_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity, negate, tap, using};

pub use crate::compose;
pub use crate::partial;
pub use crate::pipe;
