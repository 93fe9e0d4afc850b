//! Right-to-left function composition.

/// Composes functions right to left: `compose!(f, g)(x) == f(g(x))`.
///
/// With a single argument the function is returned as-is. Three or more
/// functions nest: `compose!(f, g, h) == compose!(f, compose!(g, h))`.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "control")] {
/// use funclib::compose;
/// use funclib::control::Maybe;
///
/// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
/// let double = |value: Maybe<i32>| value.map(|n| n * 2);
///
/// let parse_and_double = compose!(double, parse);
/// assert_eq!(parse_and_double("21"), Maybe::some(42));
/// assert_eq!(parse_and_double("x"), Maybe::none());
/// # }
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
