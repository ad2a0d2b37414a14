//! Command queue
//!
//! FIFO hand-off of commands from any number of callers to the executor.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

use crate::command::Command;
use crate::error::{Result, SoloError};

/// Executor lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    /// Accepting and applying commands
    Running,

    /// Shutdown requested: applying what is queued, rejecting new commands
    Draining,

    /// Queue drained and executor exited
    Stopped,
}

struct Inner {
    queue: VecDeque<Command>,
    state: ExecutorState,
}

/// Many-producer / single-consumer command queue
///
/// The queue and the lifecycle state share one mutex. A producer either
/// observes `Running` and gets its command in before shutdown, or observes
/// the shutdown and fails; there is no window where a command is accepted
/// but never applied.
pub struct CommandChannel {
    inner: Mutex<Inner>,
    work_ready: Condvar,
}

impl CommandChannel {
    /// Create an empty channel in the `Running` state
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                queue: VecDeque::new(),
                state: ExecutorState::Running,
            }),
            work_ready: Condvar::new(),
        }
    }

    /// Append a command and wake the executor
    ///
    /// Never blocks beyond the lock hand-off. Fails with `ShutDown` once
    /// shutdown has been requested.
    pub fn enqueue(&self, command: Command) -> Result<()> {
        {
            let mut inner = self.inner.lock();
            if inner.state != ExecutorState::Running {
                return Err(SoloError::ShutDown);
            }
            inner.queue.push_back(command);
        }
        self.work_ready.notify_one();
        Ok(())
    }

    /// Block until a command is available, then pop it
    ///
    /// Returns `None` once shutdown was requested and the queue is empty.
    /// Only the executor calls this.
    pub fn drain_or_wait(&self) -> Option<Command> {
        let mut inner = self.inner.lock();
        // Predicate is rechecked under the lock after every wake-up, so a
        // notify that lands before we park is never lost.
        while inner.queue.is_empty() && inner.state == ExecutorState::Running {
            self.work_ready.wait(&mut inner);
        }
        inner.queue.pop_front()
    }

    /// Move `Running` to `Draining` and wake the executor
    ///
    /// Returns false if shutdown had already been requested.
    pub fn request_shutdown(&self) -> bool {
        let transitioned = {
            let mut inner = self.inner.lock();
            if inner.state == ExecutorState::Running {
                inner.state = ExecutorState::Draining;
                true
            } else {
                false
            }
        };
        self.work_ready.notify_all();
        transitioned
    }

    /// Mark the executor as exited and discard anything still queued
    ///
    /// Discarded commands drop their reply senders, which wakes their
    /// waiters with `None`. Returns the number of commands discarded.
    /// Must not log: it runs while the executor thread unwinds.
    pub fn close(&self) -> usize {
        let discarded = {
            let mut inner = self.inner.lock();
            inner.state = ExecutorState::Stopped;
            std::mem::take(&mut inner.queue)
        };
        self.work_ready.notify_all();
        discarded.len()
    }

    /// Current lifecycle state
    pub fn state(&self) -> ExecutorState {
        self.inner.lock().state
    }

    /// Commands waiting to be applied
    pub fn pending(&self) -> usize {
        self.inner.lock().queue.len()
    }
}

impl Default for CommandChannel {
    fn default() -> Self {
        Self::new()
    }
}
