//! Hasher selection for memo caches.
//!
//! The `fxhash` feature selects `rustc_hash::FxBuildHasher`, the `ahash`
//! feature selects `ahash::RandomState`. With neither, the standard library's
//! SipHash-based `RandomState` is used. `fxhash` wins when both are enabled.

use std::collections::HashMap;

/// The `BuildHasher` used by every memo cache.
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by every memo cache.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// The `BuildHasher` used by every memo cache.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

pub(crate) type CacheMap<K, V> = HashMap<K, V, CacheHasher>;

pub(crate) fn cache_map<K, V>(capacity: usize) -> CacheMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, CacheHasher::default())
}
