//! Executor Module
//!
//! The single owner of the entry store.
//!
//! ## Responsibilities
//! - Pull commands off the channel one at a time, in FIFO order
//! - Apply each one to the store and answer reads
//! - Drain the queue completely on shutdown, then report and exit
//!
//! The executor runs on its own thread and is the only code path that ever
//! touches the `EntryStore`, which is why the store has no lock.

use std::sync::Arc;

use crate::channel::CommandChannel;
use crate::command::Command;
use crate::store::{EntryStore, StoreStats};

/// Summary returned when the executor exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorReport {
    /// Total commands applied over the executor's lifetime
    pub commands_applied: u64,

    /// Lazy evictions performed
    pub expired_evictions: u64,

    /// Keys left in the store at exit
    pub keys_remaining: usize,
}

/// Sole owner and mutator of the entry store
pub struct Executor {
    store: EntryStore,
    channel: Arc<CommandChannel>,
    commands_applied: u64,
}

impl Executor {
    /// Create an executor consuming from `channel`
    pub fn new(channel: Arc<CommandChannel>) -> Self {
        Self {
            store: EntryStore::new(),
            channel,
            commands_applied: 0,
        }
    }

    /// Run until shutdown is requested and the queue is empty
    ///
    /// Every command accepted by the channel is applied before this returns,
    /// so no reader is left waiting on a slot that will never be filled.
    pub fn run(mut self) -> ExecutorReport {
        tracing::debug!("Executor started");

        while let Some(command) = self.channel.drain_or_wait() {
            self.apply(command);
        }

        self.channel.close();

        let report = ExecutorReport {
            commands_applied: self.commands_applied,
            expired_evictions: self.store.expired_evictions(),
            keys_remaining: self.store.len(),
        };
        tracing::debug!(
            "Executor stopped: {} commands applied, {} expired evictions, {} keys remaining",
            report.commands_applied,
            report.expired_evictions,
            report.keys_remaining
        );
        report
    }

    /// Apply a single command to the store
    pub fn apply(&mut self, command: Command) {
        tracing::trace!("Applying {:?} for key {:?}", command.command_type(), command.key());
        self.commands_applied += 1;

        match command {
            Command::Write { key, value } => self.store.write(key, value),
            Command::WriteTtl { key, value, ttl } => self.store.write_with_ttl(key, value, ttl),
            Command::Read { key, reply } => reply.send(self.store.read(&key)),
            Command::Delete { key } => self.store.delete(&key),
            Command::Flush { reply } => reply.send(()),
            Command::Stats { reply } => reply.send(self.stats()),
        }
    }

    /// Current counters
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            keys: self.store.len(),
            expired_evictions: self.store.expired_evictions(),
            commands_applied: self.commands_applied,
        }
    }
}

impl Drop for Executor {
    // Runs on normal exit and on unwind. Closing the channel makes later
    // enqueues fail fast and wakes every caller still waiting on a reply.
    fn drop(&mut self) {
        self.channel.close();
    }
}
