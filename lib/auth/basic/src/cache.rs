//  CACHE.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 10:31:40
//  Last edited:
//    27 Aug 2026, 11:02:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Provides the shared store of previously verified profiles.
//

use dashmap::DashMap;
use specifications::UserProfile;


/***** LIBRARY *****/
/// Derives the cache key for the given credential pair.
///
/// The userid length is prefixed so that differing userid/password boundary splits can
/// never collide: `("ab", "c")` and `("a", "bc")` concatenate identically but key
/// differently.
///
/// # Arguments
/// - `userid`: The userid half of the pair.
/// - `password`: The password half of the pair.
///
/// # Returns
/// A key that is identical for identical pairs and distinct for distinct ones.
#[inline]
pub fn cache_key(userid: &str, password: &str) -> String { format!("{}:{userid}{password}", userid.len()) }



/// An in-process, thread-safe store of previously verified profiles, keyed by credential
/// pair.
///
/// The store is shared across concurrent requests through the owning
/// [`BasicStrategy`](crate::BasicStrategy). Entries are written only after a successful
/// verification and never expire; concurrent stores for the same key simply let the last
/// one win.
#[derive(Debug, Default)]
pub struct ProfileCache {
    /// The entries themselves, in a sharded map.
    entries: DashMap<String, UserProfile>,
}
impl ProfileCache {
    /// Constructor for the ProfileCache.
    ///
    /// # Returns
    /// A new, empty ProfileCache.
    #[inline]
    pub fn new() -> Self { Self { entries: DashMap::new() } }

    /// Looks up the profile previously verified for the given key.
    ///
    /// # Arguments
    /// - `key`: The key as derived by [`cache_key()`].
    ///
    /// # Returns
    /// A clone of the cached [`UserProfile`], or [`None`] if this pair was never verified.
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<UserProfile> { self.entries.get(key).map(|entry| entry.value().clone()) }

    /// Stores a freshly verified profile under the given key.
    ///
    /// Overwrites any existing entry for that key.
    ///
    /// # Arguments
    /// - `key`: The key as derived by [`cache_key()`].
    /// - `profile`: The [`UserProfile`] that verification produced for this pair.
    #[inline]
    pub fn store(&self, key: String, profile: UserProfile) { self.entries.insert(key, profile); }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn stores_and_looks_up() {
        let cache = ProfileCache::new();
        let key: String = cache_key("Mary", "qwerasdf");
        assert!(cache.lookup(&key).is_none());

        cache.store(key.clone(), UserProfile::new("Mary", "Mary", "HTTPBasic"));
        let hit: UserProfile = cache.lookup(&key).unwrap();
        assert_eq!(hit.id, "Mary");
        assert_eq!(hit.provider, "HTTPBasic");
    }

    #[test]
    fn last_store_wins() {
        let cache = ProfileCache::new();
        let key: String = cache_key("Mary", "qwerasdf");
        cache.store(key.clone(), UserProfile::new("Mary", "First", "HTTPBasic"));
        cache.store(key.clone(), UserProfile::new("Mary", "Second", "HTTPBasic"));
        assert_eq!(cache.lookup(&key).unwrap().display_name, "Second");
    }

    #[test]
    fn boundary_splits_key_differently() {
        assert_ne!(cache_key("ab", "c"), cache_key("a", "bc"));
        assert_eq!(cache_key("Mary", "qwerasdf"), cache_key("Mary", "qwerasdf"));
    }

    #[test]
    fn survives_concurrent_traffic() {
        let cache = Arc::new(ProfileCache::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        let userid: String = format!("user{}", i % 10);
                        let key: String = cache_key(&userid, "hunter2");
                        cache.store(key.clone(), UserProfile::new(userid, format!("Thread {t}"), "HTTPBasic"));
                        assert!(cache.lookup(&key).is_some());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
