//! Single-threaded memoization.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

use super::hasher::{CacheMap, cache_map};

/// Key/value storage shared by the single-threaded memoizers.
///
/// The `RefCell` borrow is only held inside these methods, never while the
/// wrapped function runs.
struct LocalCache<K, V> {
    entries: RefCell<CacheMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> LocalCache<K, V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(cache_map(capacity)),
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.borrow().get(key).cloned()
    }

    /// Stores `value` unless a nested call already stored one for `key`,
    /// returning whichever is cached.
    fn store(&self, key: K, value: V) -> V {
        let mut entries = self.entries.borrow_mut();
        let cached = entries.entry(key).or_insert(value).clone();
        tracing::trace!(size = entries.len(), "memo cache stored entry");
        cached
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

/// A memoizing wrapper around a single-argument function.
///
/// The first call for a key runs the function and caches the result; later
/// calls with an equal key return a clone of the cached value. The cache
/// only grows: every distinct key stays cached for the wrapper's lifetime.
///
/// `Memoized` uses interior mutability without locking, so it is not `Sync`.
/// Use [`ConcurrentMemoized`](super::ConcurrentMemoized) to share a cache
/// between threads.
///
/// # Examples
///
/// ```rust
/// use funclib::memo::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = memoize(|n: u64| {
///     calls.set(calls.get() + 1);
///     n * n
/// });
///
/// assert_eq!(square.call(5), 25);
/// assert_eq!(square.call(5), 25);
/// assert_eq!(square.call(7), 49);
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Memoized<K, V, F> {
    function: F,
    cache: LocalCache<K, V>,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(K) -> V,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self::with_capacity(function, 0)
    }

    /// Wraps `function` with a cache pre-sized for `capacity` keys.
    pub fn with_capacity(function: F, capacity: usize) -> Self {
        Self {
            function,
            cache: LocalCache::with_capacity(capacity),
        }
    }

    /// Returns the cached result for `key`, computing it on first use.
    pub fn call(&self, key: K) -> V {
        if let Some(value) = self.cache.get(&key) {
            tracing::trace!("memo cache hit");
            return value;
        }
        tracing::trace!("memo cache miss");
        let value = (self.function)(key.clone());
        self.cache.store(key, value)
    }

    /// Borrows the memoizer as a plain closure.
    pub fn as_fn(&self) -> impl Fn(K) -> V + '_ {
        move |key| self.call(key)
    }

    /// Returns the number of cached keys.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a result for `key` is cached.
    pub fn contains_key(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }
}

impl<K, V, F> fmt::Debug for Memoized<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.cache.entries.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A memoizing wrapper around a function that calls itself.
///
/// The wrapped function receives a `recurse` handle as its first argument.
/// Calls through the handle go through the same cache, so every
/// sub-problem is computed once.
///
/// # Examples
///
/// ```rust
/// use funclib::memo::memoize_recursive;
///
/// let fibonacci = memoize_recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
///     if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
/// });
///
/// assert_eq!(fibonacci.call(90), 2_880_067_194_370_816_120);
/// assert_eq!(fibonacci.len(), 91);
/// ```
pub struct RecursiveMemoized<K, V, F> {
    function: F,
    cache: LocalCache<K, V>,
}

impl<K, V, F> RecursiveMemoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&dyn Fn(K) -> V, K) -> V,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self::with_capacity(function, 0)
    }

    /// Wraps `function` with a cache pre-sized for `capacity` keys.
    pub fn with_capacity(function: F, capacity: usize) -> Self {
        Self {
            function,
            cache: LocalCache::with_capacity(capacity),
        }
    }

    /// Returns the cached result for `key`, computing it on first use.
    pub fn call(&self, key: K) -> V {
        if let Some(value) = self.cache.get(&key) {
            tracing::trace!("memo cache hit");
            return value;
        }
        tracing::trace!("memo cache miss");
        let recurse = |inner: K| self.call(inner);
        let value = (self.function)(&recurse, key.clone());
        self.cache.store(key, value)
    }

    /// Borrows the memoizer as a plain closure.
    pub fn as_fn(&self) -> impl Fn(K) -> V + '_ {
        move |key| self.call(key)
    }

    /// Returns the number of cached keys.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a result for `key` is cached.
    pub fn contains_key(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }
}

impl<K, V, F> fmt::Debug for RecursiveMemoized<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RecursiveMemoized")
            .field("cached", &self.cache.entries.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` in a [`Memoized`] cache.
pub fn memoize<K, V, F>(function: F) -> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(K) -> V,
{
    Memoized::new(function)
}

/// Wraps a self-referential `function` in a [`RecursiveMemoized`] cache.
pub fn memoize_recursive<K, V, F>(function: F) -> RecursiveMemoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&dyn Fn(K) -> V, K) -> V,
{
    RecursiveMemoized::new(function)
}

static_assertions::assert_not_impl_any!(Memoized<u64, u64, fn(u64) -> u64>: Sync);
static_assertions::assert_not_impl_any!(RecursiveMemoized<u64, u64, fn(&dyn Fn(u64) -> u64, u64) -> u64>: Sync);
