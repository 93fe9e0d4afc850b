//! Left-to-right function application.

/// Threads a value through functions left to right: `pipe!(x, f, g) == g(f(x))`.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "control")] {
/// use funclib::pipe;
/// use funclib::control::Validation;
/// use funclib::error::Error;
///
/// let check_positive = |n: i32| {
///     if n > 0 { Validation::valid(n) } else { Validation::invalid(Error::new("not positive")) }
/// };
///
/// let result = pipe!(-3, check_positive, |v: Validation<i32>| v.to_string());
/// assert_eq!(result, "Invalid([not positive])");
/// # }
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
