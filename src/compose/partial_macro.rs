//! Partial application for two- and three-argument functions.

/// Fixes some arguments of a function, leaving `__` placeholders as the
/// parameters of the returned closure.
///
/// `__` is matched as a literal token; do not import anything for it. Fixed
/// arguments are evaluated once and cloned on every call, so they must be
/// `Clone`. Fixing every argument produces a thunk.
///
/// # Examples
///
/// ```rust
/// use funclib::partial;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = partial!(clamp, 0, 100, __);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-5), 0);
///
/// let at_least_ten = partial!(clamp, 10, __, __);
/// assert_eq!(at_least_ten(20, 3), 10);
/// ```
#[macro_export]
macro_rules! partial {
    // three arguments
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};

    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, second.clone(), third)
    }};

    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| function(first.clone(), second.clone(), third)
    }};

    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| function(first.clone(), second, third.clone())
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| function(first, second.clone(), third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || function(first.clone(), second.clone(), third.clone())
    }};

    // two arguments
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, second.clone())
    }};

    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || function(first.clone(), second.clone())
    }};
}
