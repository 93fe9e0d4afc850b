//! Helper combinators for function composition.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`negate`]: inverts a predicate
//! - [`tap`]: runs a side effect on a value and returns the value
//! - [`using`]: scopes a resource to one computation, dropping it afterwards

/// The identity function.
///
/// # Examples
///
/// ```rust
/// use funclib::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its argument and returns `value`.
///
/// # Examples
///
/// ```rust
/// use funclib::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Examples
///
/// ```rust
/// use funclib::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Returns a predicate that is `true` exactly when `predicate` is `false`.
///
/// # Examples
///
/// ```rust
/// use funclib::compose::negate;
///
/// let is_even = |n: &i32| n % 2 == 0;
/// let is_odd = negate(is_even);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn negate<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Fn(A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Runs `action` on a borrow of `value`, then returns `value`.
///
/// # Examples
///
/// ```rust
/// use funclib::compose::tap;
///
/// let mut seen = Vec::new();
/// let value = tap(5, |n| seen.push(*n));
/// assert_eq!(value, 5);
/// assert_eq!(seen, vec![5]);
/// ```
#[inline]
pub fn tap<T, F>(value: T, action: F) -> T
where
    F: FnOnce(&T),
{
    action(&value);
    value
}

/// Runs `function` with a borrow of `resource`, then drops the resource.
///
/// The resource is released before the result is returned, even when the
/// result does not borrow from it.
///
/// # Examples
///
/// ```rust
/// use funclib::compose::using;
///
/// let length = using(String::from("scoped"), |text| text.len());
/// assert_eq!(length, 6);
/// ```
#[inline]
pub fn using<R, T, F>(resource: R, function: F) -> T
where
    F: FnOnce(&R) -> T,
{
    let result = function(&resource);
    drop(resource);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn flip_swaps_asymmetric_arguments() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        let flipped = flip(power);
        assert_eq!(flipped(3, 2), 8);
    }

    #[rstest]
    #[case(0, false)]
    #[case(7, true)]
    fn negate_inverts_predicate(#[case] input: i32, #[case] expected: bool) {
        let is_zero = |n: i32| n == 0;
        assert_eq!(negate(is_zero)(input), expected);
    }

    #[rstest]
    fn using_drops_resource_after_use() {
        struct Guard<'a>(&'a Cell<bool>);
        impl Drop for Guard<'_> {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = Cell::new(false);
        let observed = using(Guard(&dropped), |guard| guard.0.get());
        assert!(!observed);
        assert!(dropped.get());
    }
}
