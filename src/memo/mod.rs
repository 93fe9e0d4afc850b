//! Memoizing wrappers around pure functions.
//!
//! - [`memoize`] / [`Memoized`]: single-threaded cache
//! - [`memoize_recursive`] / [`RecursiveMemoized`]: single-threaded cache for
//!   functions that call themselves
//! - [`memoize_concurrent`] / [`ConcurrentMemoized`]: cache shared between
//!   threads, computing each key at most once
//!
//! Keys must be `Eq + Hash + Clone` and values `Clone`; every call returns a
//! clone of the cached value. Caches are unbounded and grow by one entry per
//! distinct key. The hasher is selected with the `fxhash` and `ahash`
//! features (see [`CacheHasher`]).
//!
//! Cache hits and misses are reported as `tracing` events at `TRACE` level.
//! The library never installs a subscriber.
//!
//! # Examples
//!
//! ```rust
//! use funclib::memo::memoize;
//!
//! let slow_length = memoize(|text: String| text.chars().count());
//! assert_eq!(slow_length.call("héllo".to_string()), 5);
//! assert!(slow_length.contains_key(&"héllo".to_string()));
//! ```

mod concurrent;
mod hasher;
mod memoized;

pub use concurrent::{ConcurrentMemoized, memoize_concurrent};
pub use hasher::CacheHasher;
pub use memoized::{Memoized, RecursiveMemoized, memoize, memoize_recursive};
