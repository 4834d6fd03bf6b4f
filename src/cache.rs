// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use parking_lot::RwLock;
use std::collections::HashMap;

/**
Memoized canonical forms, keyed by the caller's input string exactly as given.

Lookups share a read lock and never block each other. An insert holds the
write lock for exactly one `entry().or_insert()` call plus a clone of the
stored value, and nothing else (no parsing, no rendering) ever runs under
it, so readers wait at most that long. Once a key is present its value never
changes, so two threads racing to store the same (deterministic) canonical
form is harmless.

NOTE: unbounded, entries are never evicted. This assumes a finite universe of
host strings (configured peers, cluster members and the like), not input
chosen by an adversary.
*/
#[derive(Debug, Default)]
pub struct CanonicalCache {
    map: RwLock<HashMap<String, String>>,
}

impl CanonicalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.map.read().get(key).cloned()
    }

    /// Store `value` under `key` unless already present.
    /// Returns whatever ends up stored under `key`.
    pub fn insert(&self, key: &str, value: String) -> String {
        let mut map = self.map.write();
        map.entry(key.to_string()).or_insert(value).clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const KEY: &str = "[::1]";
    const VAL: &str = "0:0:0:0:0:0:0:1";

    #[test]
    fn test_get_insert() {
        let cache: CanonicalCache = CanonicalCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(KEY), None);

        assert_eq!(cache.insert(KEY, VAL.to_string()), VAL);
        assert_eq!(cache.get(KEY).as_deref(), Some(VAL));
        assert!(cache.contains(KEY));
        assert!(!cache.contains("::1"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_if_absent() {
        let cache: CanonicalCache = CanonicalCache::new();
        cache.insert(KEY, VAL.to_string());
        assert_eq!(cache.insert(KEY, "something else".to_string()), VAL);
        assert_eq!(cache.get(KEY).as_deref(), Some(VAL));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_inserts() {
        let cache: CanonicalCache = CanonicalCache::new();
        let stored: Vec<String> = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| cache.insert(KEY, VAL.to_string())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(stored.iter().all(|v| v == VAL));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_readers_during_inserts() {
        let cache: CanonicalCache = CanonicalCache::new();
        cache.insert(KEY, VAL.to_string());
        thread::scope(|s| {
            for n in 0..8 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..64 {
                        cache.insert(&format!("10.{n}.0.{i}"), format!("10.{n}.0.{i}"));
                    }
                });
                s.spawn(move || {
                    for _ in 0..64 {
                        assert_eq!(cache.get(KEY).as_deref(), Some(VAL));
                    }
                });
            }
        });
        assert_eq!(cache.len(), 8 * 64 + 1);
        assert_eq!(cache.get("10.7.0.63").as_deref(), Some("10.7.0.63"));
    }
}
