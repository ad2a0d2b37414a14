//! Channel Module
//!
//! Hand-off between caller threads and the executor.
//!
//! ## Components
//! - `CommandChannel`: many-producer / single-consumer FIFO of commands,
//!   a `parking_lot` Mutex + Condvar pair. Also carries the executor's
//!   lifecycle state so enqueue and shutdown are decided under one lock.
//! - `ReplySender` / `ReplyReceiver`: one-shot result slot per request,
//!   backed by a crossbeam channel of capacity one.
//!
//! ## Lifecycle
//! ```text
//!   Running ──request_shutdown()──▶ Draining ──queue empty──▶ Stopped
//!   (enqueue ok)                    (enqueue fails)            (enqueue fails)
//! ```

mod queue;
mod reply;

pub use queue::{CommandChannel, ExecutorState};
pub use reply::{slot, ReplyReceiver, ReplySender};
