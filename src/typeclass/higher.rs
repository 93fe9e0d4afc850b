//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the inner type and the same constructor applied
//! to another type, which is enough to state `Functor`, `Applicative` and
//! `Monad` once for every control structure.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "control")] {
//! use funclib::control::Maybe;
//! use funclib::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Maybe<String> = reset(Maybe::some(42));
//! assert_eq!(none, Maybe::Nothing);
//! # }
//! ```

#[cfg(feature = "control")]
use crate::control::{Attempt, Either, Maybe, Validation};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Control Structure Implementations
// =============================================================================

#[cfg(feature = "control")]
impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// Right-biased: the left type is fixed.
#[cfg(feature = "control")]
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

#[cfg(feature = "control")]
impl<T> TypeConstructor for Validation<T> {
    type Inner = T;
    type WithType<B> = Validation<B>;
}

#[cfg(feature = "control")]
impl<T> TypeConstructor for Attempt<T> {
    type Inner = T;
    type WithType<B> = Attempt<B>;
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn either_inner_type_is_right_side() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Either<i32, String>>();
    }

    #[test]
    fn validation_with_type_produces_correct_type() {
        fn assert_with_type<T: TypeConstructor<WithType<bool> = Validation<bool>>>() {}
        assert_with_type::<Validation<u8>>();
    }

    #[test]
    fn attempt_with_type_produces_correct_type() {
        fn assert_with_type<T: TypeConstructor<WithType<()> = Attempt<()>>>() {}
        assert_with_type::<Attempt<String>>();
    }
}
