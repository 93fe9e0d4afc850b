//! Closed discriminated unions of two to five alternatives.
//!
//! `UnionN<T1, ..., TN>` holds exactly one value of one of its type
//! parameters, tagged by position. The tag is positional, so
//! `Union2<i32, i32>` is a legal type whose two alternatives are still
//! distinguished: `Union2::T1(1) != Union2::T2(1)`.
//!
//! Construction is available in two forms:
//!
//! - positional: `Union3::from_t2(value)` or `Union3::T2(value)`
//! - type-directed: `Union3::inject(value)`, which picks the alternative whose
//!   type matches `value`
//!
//! Type-directed construction only compiles when exactly one alternative
//! matches. If the value type appears at several positions the position
//! cannot be inferred and the call is rejected:
//!
//! ```compile_fail
//! use funclib::control::Union2;
//!
//! let ambiguous: Union2<i32, i32> = Union2::inject(5);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funclib::control::Union3;
//!
//! let value: Union3<i32, f64, String> = Union3::inject("hello".to_string());
//! assert!(value.is_t3());
//! assert_eq!(value.index(), 3);
//!
//! let rendered = value.fold(|n| n.to_string(), |x| format!("{x:.2}"), |s| s);
//! assert_eq!(rendered, "hello");
//! ```

use std::fmt;

/// Marker for the first alternative of a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At1;

/// Marker for the second alternative of a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At2;

/// Marker for the third alternative of a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At3;

/// Marker for the fourth alternative of a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At4;

/// Marker for the fifth alternative of a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At5;

/// Type-directed construction of a union from one of its alternatives.
///
/// `Index` is one of the [`At1`]..[`At5`] markers. It is normally inferred:
/// when `T` occurs at exactly one position the compiler finds the single
/// matching implementation.
pub trait Inject<T, Index>: Sized {
    /// Wraps `value` in the alternative at position `Index`.
    fn inject(value: T) -> Self;
}

macro_rules! impl_inject {
    ($name:ident [$($param:ident),+] $variant:ident $index:ident) => {
        impl<$($param),+> Inject<$variant, $index> for $name<$($param),+> {
            #[inline]
            fn inject(value: $variant) -> Self {
                Self::$variant(value)
            }
        }
    };
}

macro_rules! define_union {
    (
        $(#[$meta:meta])*
        $name:ident $generics:tt {
            $($variant:ident => $index:ident = $position:literal),+ $(,)?
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
            pub enum $name<$($variant),+> {
                $(
                    #[allow(missing_docs)]
                    $variant($variant),
                )+
            }

            impl<$($variant),+> $name<$($variant),+> {
                $(
                    /// Creates the union holding this alternative.
                    #[inline]
                    pub const fn [<from_ $variant:lower>](value: $variant) -> Self {
                        Self::$variant(value)
                    }

                    /// Returns `true` if this alternative is held.
                    #[inline]
                    pub const fn [<is_ $variant:lower>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }

                    /// Returns a reference to this alternative, if held.
                    #[inline]
                    pub const fn [<$variant:lower _ref>](&self) -> Option<&$variant> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }

                    /// Consumes the union, returning this alternative if held.
                    #[inline]
                    pub fn [<into_ $variant:lower>](self) -> Option<$variant> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }
                )+

                /// Creates the union from a value whose type occurs at exactly
                /// one position.
                #[inline]
                pub fn inject<T, Index>(value: T) -> Self
                where
                    Self: Inject<T, Index>,
                {
                    <Self as Inject<T, Index>>::inject(value)
                }

                /// Returns the 1-based position of the held alternative.
                #[inline]
                pub const fn index(&self) -> usize {
                    match self {
                        $(Self::$variant(_) => $position,)+
                    }
                }

                /// Eliminates the union by invoking exactly one handler, the
                /// one matching the held alternative.
                #[inline]
                pub fn fold<R, $([<On $variant>]),+>(self, $([<on_ $variant:lower>]: [<On $variant>]),+) -> R
                where
                    $([<On $variant>]: FnOnce($variant) -> R,)+
                {
                    match self {
                        $(Self::$variant(value) => [<on_ $variant:lower>](value),)+
                    }
                }

                /// Runs the handler matching the held alternative, for its effect.
                #[inline]
                pub fn for_each<$([<On $variant>]),+>(&self, $([<on_ $variant:lower>]: [<On $variant>]),+)
                where
                    $([<On $variant>]: FnOnce(&$variant),)+
                {
                    match self {
                        $(Self::$variant(value) => [<on_ $variant:lower>](value),)+
                    }
                }
            }

            $(impl_inject!($name $generics $variant $index);)+

            impl<$($variant: fmt::Display),+> fmt::Display for $name<$($variant),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        $(Self::$variant(value) => fmt::Display::fmt(value, formatter),)+
                    }
                }
            }
        }
    };
}

define_union! {
    /// A value that is exactly one of two alternatives.
    Union2 [T1, T2] {
        T1 => At1 = 1,
        T2 => At2 = 2,
    }
}

define_union! {
    /// A value that is exactly one of three alternatives.
    Union3 [T1, T2, T3] {
        T1 => At1 = 1,
        T2 => At2 = 2,
        T3 => At3 = 3,
    }
}

define_union! {
    /// A value that is exactly one of four alternatives.
    Union4 [T1, T2, T3, T4] {
        T1 => At1 = 1,
        T2 => At2 = 2,
        T3 => At3 = 3,
        T4 => At4 = 4,
    }
}

define_union! {
    /// A value that is exactly one of five alternatives.
    Union5 [T1, T2, T3, T4, T5] {
        T1 => At1 = 1,
        T2 => At2 = 2,
        T3 => At3 = 3,
        T4 => At4 = 4,
        T5 => At5 = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_payload_at_different_positions_is_unequal() {
        let first: Union2<i32, i32> = Union2::T1(1);
        let second: Union2<i32, i32> = Union2::T2(1);
        assert_ne!(first, second);
        assert_eq!(first.index(), 1);
        assert_eq!(second.index(), 2);
    }

    #[rstest]
    fn accessors_only_expose_held_alternative() {
        let value: Union3<i32, f64, String> = Union3::from_t2(2.5);
        assert_eq!(value.t1_ref(), None);
        assert_eq!(value.t2_ref(), Some(&2.5));
        assert_eq!(value.clone().into_t3(), None);
        assert_eq!(value.into_t2(), Some(2.5));
    }

    #[rstest]
    #[case(Union4::T1(7), "7")]
    #[case(Union4::T4('z'), "z")]
    fn display_renders_held_value(
        #[case] value: Union4<i32, &'static str, bool, char>,
        #[case] expected: &str,
    ) {
        assert_eq!(value.to_string(), expected);
    }
}
