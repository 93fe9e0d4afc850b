//! Thread-safe memoization.

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::hasher::{CacheMap, cache_map};

type Cell<V> = Arc<OnceLock<V>>;

/// A memoizing wrapper that can be shared between threads.
///
/// Each key owns a write-once cell. The map lock is held only while the cell
/// for a key is looked up or created; the function itself runs inside the
/// cell's initializer, outside the map lock. Concurrent first calls for the
/// same key therefore run the function once, and callers for other keys are
/// never blocked by it.
///
/// Calling `call` for a key from inside the function while that same key is
/// being computed deadlocks. Use [`memoize_recursive`](super::memoize_recursive)
/// for self-referential functions.
///
/// # Examples
///
/// ```rust
/// use funclib::memo::memoize_concurrent;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let square = Arc::new(memoize_concurrent(move |n: u64| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     n * n
/// }));
///
/// let handles: Vec<_> = (0..8)
///     .map(|_| {
///         let square = Arc::clone(&square);
///         thread::spawn(move || square.call(12))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 144);
/// }
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct ConcurrentMemoized<K, V, F> {
    function: F,
    cells: Mutex<CacheMap<K, Cell<V>>>,
}

impl<K, V, F> ConcurrentMemoized<K, V, F>
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
            cells: Mutex::new(cache_map(capacity)),
        }
    }

    fn cell_for(&self, key: &K) -> Cell<V> {
        let mut cells = self.cells.lock();
        if let Some(cell) = cells.get(key) {
            return Arc::clone(cell);
        }
        let cell = Arc::new(OnceLock::new());
        cells.insert(key.clone(), Arc::clone(&cell));
        tracing::debug!(size = cells.len(), "memo cell created");
        cell
    }

    /// Returns the cached result for `key`, computing it on first use.
    pub fn call(&self, key: K) -> V {
        let cell = self.cell_for(&key);
        if let Some(value) = cell.get() {
            tracing::trace!("memo cache hit");
            return value.clone();
        }
        cell.get_or_init(|| {
            tracing::trace!("memo cache miss");
            (self.function)(key)
        })
        .clone()
    }

    /// Borrows the memoizer as a plain closure.
    pub fn as_fn(&self) -> impl Fn(K) -> V + '_ {
        move |key| self.call(key)
    }

    /// Returns the number of keys whose result is cached.
    pub fn len(&self) -> usize {
        self.cells
            .lock()
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Returns `true` if no result has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a result for `key` is cached.
    pub fn contains_key(&self, key: &K) -> bool {
        self.cells
            .lock()
            .get(key)
            .is_some_and(|cell| cell.get().is_some())
    }
}

impl<K, V, F> fmt::Debug for ConcurrentMemoized<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConcurrentMemoized")
            .field("cells", &self.cells.lock().len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` in a [`ConcurrentMemoized`] cache.
pub fn memoize_concurrent<K, V, F>(function: F) -> ConcurrentMemoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(K) -> V,
{
    ConcurrentMemoized::new(function)
}

static_assertions::assert_impl_all!(ConcurrentMemoized<u64, String, fn(u64) -> String>: Send, Sync);
static_assertions::assert_not_impl_any!(ConcurrentMemoized<u64, std::rc::Rc<u64>, fn(u64) -> std::rc::Rc<u64>>: Send, Sync);
