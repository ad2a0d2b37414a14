//! Engine Module
//!
//! The public handle callers use, and the lifecycle controller for the
//! executor thread.
//!
//! ## Responsibilities
//! - Validate arguments and turn calls into commands
//! - Enqueue commands and, for reads, block on the reply slot
//! - Start the executor on open, drain and join it on shutdown/drop

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::channel::{slot, CommandChannel, ExecutorState};
use crate::command::Command;
use crate::config::Config;
use crate::error::{Result, SoloError};
use crate::executor::{Executor, ExecutorReport};
use crate::store::StoreStats;

/// The main key-value engine
///
/// ## Concurrency Model: Single Owner / Command Queue
///
/// - **Writes** (set/set_with_ttl/del): fire-and-forget
///   - Append to the command queue and return
///   - Applied later by the executor, strictly in enqueue order
///
/// - **Reads** (get): blocking
///   - Enqueue a read carrying a one-shot reply slot
///   - Wait on the slot until the executor answers
///
/// Because every command goes through the same FIFO queue, a `get` issued
/// after a `set` has returned always observes that `set`.
///
/// `Engine` is `Send + Sync`; share it with `Arc<Engine>` or scoped threads.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Queue shared with the executor
    channel: Arc<CommandChannel>,

    /// Executor thread, taken on the first shutdown
    worker: Mutex<Option<JoinHandle<ExecutorReport>>>,
}

impl Engine {
    /// Start an engine with the given config
    ///
    /// Spawns the executor thread; it is running when this returns.
    pub fn open(config: Config) -> Result<Self> {
        let channel = Arc::new(CommandChannel::new());
        let executor = Executor::new(Arc::clone(&channel));

        let mut builder = thread::Builder::new().name(config.executor_thread_name.clone());
        if let Some(stack_size) = config.executor_stack_size {
            builder = builder.stack_size(stack_size);
        }
        let worker = builder.spawn(move || executor.run())?;

        tracing::debug!("Engine opened with executor thread {:?}", config.executor_thread_name);

        Ok(Self {
            config,
            channel,
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Start an engine with the default config
    pub fn new() -> Result<Self> {
        Self::open(Config::default())
    }

    /// Set a key with no expiry, replacing any previous value and TTL
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = validate_key(key.into())?;
        self.channel.enqueue(Command::Write {
            key,
            value: value.into(),
        })
    }

    /// Set a key that expires `ttl_seconds` from when the executor applies it
    ///
    /// A TTL of zero expires immediately: the next `get` reports not-found.
    pub fn set_with_ttl(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl_seconds: u64,
    ) -> Result<()> {
        let key = validate_key(key.into())?;
        self.channel.enqueue(Command::WriteTtl {
            key,
            value: value.into(),
            ttl: Duration::from_secs(ttl_seconds),
        })
    }

    /// Get a value by key
    ///
    /// Blocks until the executor answers. `Ok(None)` means the key is absent
    /// or expired.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let key = validate_key(key.to_string())?;
        let (reply, answer) = slot();
        self.channel.enqueue(Command::Read { key, reply })?;

        match answer.wait() {
            Some(value) => Ok(value),
            None => {
                tracing::warn!("Read slot dropped unanswered, reporting not-found");
                Ok(None)
            }
        }
    }

    /// Delete a key. Deleting an absent key is not an error.
    pub fn del(&self, key: &str) -> Result<()> {
        let key = validate_key(key.to_string())?;
        self.channel.enqueue(Command::Delete { key })
    }

    /// Block until every command enqueued before this call has been applied
    pub fn flush(&self) -> Result<()> {
        let (reply, answer) = slot();
        self.channel.enqueue(Command::Flush { reply })?;
        answer.wait().ok_or(SoloError::ShutDown)
    }

    /// Store counters as of every command enqueued before this call
    pub fn stats(&self) -> Result<StoreStats> {
        let (reply, answer) = slot();
        self.channel.enqueue(Command::Stats { reply })?;
        answer.wait().ok_or(SoloError::ShutDown)
    }

    /// Number of keys held (expired keys count until a read evicts them)
    pub fn len(&self) -> Result<usize> {
        Ok(self.stats()?.keys)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Drain the queue and stop the executor
    ///
    /// Commands enqueued before this call are all applied; later enqueues
    /// fail with `ShutDown`. Returns the executor's report the first time,
    /// `Ok(None)` afterwards. Every caller returns only once the executor
    /// has exited, including callers racing the first one.
    pub fn shutdown(&self) -> Result<Option<ExecutorReport>> {
        if self.channel.request_shutdown() {
            tracing::debug!("Shutdown requested, draining {} pending commands", self.pending_commands());
        }

        // Held across the join so concurrent callers wait for it too
        let mut worker = self.worker.lock();
        let Some(handle) = worker.take() else {
            return Ok(None);
        };

        let report = handle.join().map_err(|_| SoloError::ExecutorPanicked)?;
        Ok(Some(report))
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Current executor lifecycle state
    pub fn state(&self) -> ExecutorState {
        self.channel.state()
    }

    /// Commands enqueued but not yet picked up by the executor
    pub fn pending_commands(&self) -> usize {
        self.channel.pending()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::warn!("Engine shutdown on drop failed: {}", e);
        }
    }
}

fn validate_key(key: String) -> Result<String> {
    if key.is_empty() {
        return Err(SoloError::InvalidKey);
    }
    Ok(key)
}
