//! EntryStore implementation
//!
//! HashMap-based store with lazy TTL eviction.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::Entry;

/// Point-in-time counters reported by the executor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Keys currently held, including expired ones not yet read
    pub keys: usize,

    /// Entries removed because a read found them expired
    pub expired_evictions: u64,

    /// Commands applied by the executor so far
    pub commands_applied: u64,
}

/// In-memory key → entry map
///
/// Expired entries stay in the map until a read touches them.
#[derive(Debug, Default)]
pub struct EntryStore {
    data: HashMap<String, Entry>,
    expired_evictions: u64,
}

impl EntryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key, clearing any previous expiry
    pub fn write(&mut self, key: String, value: String) {
        self.data.insert(key, Entry::persistent(value));
    }

    /// Insert or overwrite a key that expires `ttl` from now
    pub fn write_with_ttl(&mut self, key: String, value: String, ttl: Duration) {
        self.write_with_ttl_at(key, value, ttl, Instant::now());
    }

    /// Insert or overwrite a key that expires `ttl` after `now`
    ///
    /// A zero TTL sets the deadline to `now`, so the next read evicts it.
    /// A TTL too large to represent as an `Instant` never expires.
    pub fn write_with_ttl_at(&mut self, key: String, value: String, ttl: Duration, now: Instant) {
        let entry = match now.checked_add(ttl) {
            Some(deadline) => Entry::expiring(value, deadline),
            None => Entry::persistent(value),
        };
        self.data.insert(key, entry);
    }

    /// Read a key, evicting it if expired
    pub fn read(&mut self, key: &str) -> Option<String> {
        self.read_at(key, Instant::now())
    }

    /// Read a key as of `now`, evicting it if expired
    pub fn read_at(&mut self, key: &str, now: Instant) -> Option<String> {
        let entry = self.data.get(key)?;

        if entry.is_expired_at(now) {
            self.data.remove(key);
            self.expired_evictions += 1;
            tracing::trace!("Evicted expired key {:?}", key);
            return None;
        }

        Some(entry.value.clone())
    }

    /// Remove a key. Absent keys are a no-op.
    pub fn delete(&mut self, key: &str) {
        self.data.remove(key);
    }

    /// Check presence without evicting (expired entries still count)
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of entries held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of lazy evictions performed so far
    pub fn expired_evictions(&self) -> u64 {
        self.expired_evictions
    }
}
