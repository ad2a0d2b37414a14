//! Command definitions
//!
//! Represents the operations callers hand to the executor. A command is
//! created by a caller, consumed exactly once by the executor, then dropped.

use std::time::Duration;

use crate::channel::ReplySender;
use crate::store::StoreStats;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Write,
    WriteTtl,
    Read,
    Delete,
    Flush,
    Stats,
}

/// A queued command
#[derive(Debug)]
pub enum Command {
    /// Insert or overwrite a key with no expiry
    Write { key: String, value: String },

    /// Insert or overwrite a key that expires after `ttl`
    WriteTtl {
        key: String,
        value: String,
        ttl: Duration,
    },

    /// Read a key; the answer goes back through `reply`
    Read {
        key: String,
        reply: ReplySender<Option<String>>,
    },

    /// Remove a key
    Delete { key: String },

    /// Barrier: answered once every earlier command has been applied
    Flush { reply: ReplySender<()> },

    /// Snapshot of store counters
    Stats { reply: ReplySender<StoreStats> },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Write { .. } => CommandType::Write,
            Command::WriteTtl { .. } => CommandType::WriteTtl,
            Command::Read { .. } => CommandType::Read,
            Command::Delete { .. } => CommandType::Delete,
            Command::Flush { .. } => CommandType::Flush,
            Command::Stats { .. } => CommandType::Stats,
        }
    }

    /// Key targeted by the command, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Write { key, .. }
            | Command::WriteTtl { key, .. }
            | Command::Read { key, .. }
            | Command::Delete { key } => Some(key.as_str()),
            Command::Flush { .. } | Command::Stats { .. } => None,
        }
    }
}
