//! Entry Store Module
//!
//! The key → entry mapping owned by the executor.
//!
//! ## Responsibilities
//! - Insert, overwrite, read and delete entries
//! - Attach optional expiry deadlines (TTL)
//! - Evict expired entries lazily, on the read that finds them
//!
//! ## Concurrency
//! There is none. Every mutator takes `&mut self` and the only owner is the
//! executor thread, so the map needs no lock.

mod table;

pub use table::{EntryStore, StoreStats};

use std::time::Instant;

/// Entry stored under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The stored value
    pub value: String,

    /// Absolute deadline after which the entry is dead (`None` = no TTL)
    pub expires_at: Option<Instant>,
}

impl Entry {
    /// An entry that never expires
    pub fn persistent(value: String) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// An entry that dies at `deadline`
    pub fn expiring(value: String, deadline: Instant) -> Self {
        Self {
            value,
            expires_at: Some(deadline),
        }
    }

    /// True once `now` has reached the deadline
    pub fn is_expired_at(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }
}
