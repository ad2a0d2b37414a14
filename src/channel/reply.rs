//! One-shot result slots
//!
//! Each request that expects an answer carries a `ReplySender`; the caller
//! blocks on the matching `ReplyReceiver`.

use crossbeam::channel::{self, Receiver, Sender};

/// Create a fresh one-shot slot
pub fn slot<T>() -> (ReplySender<T>, ReplyReceiver<T>) {
    let (tx, rx) = channel::bounded(1);
    (ReplySender { tx }, ReplyReceiver { rx })
}

/// Producer half of a one-shot slot
///
/// `send` consumes the sender, so a slot can be fulfilled at most once.
/// Dropping it unfulfilled wakes the receiver with `None`.
#[derive(Debug)]
pub struct ReplySender<T> {
    tx: Sender<T>,
}

impl<T> ReplySender<T> {
    /// Fulfil the slot
    ///
    /// A caller that stopped waiting is not an error for the executor.
    pub fn send(self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::trace!("Reply receiver dropped before fulfilment");
        }
    }
}

/// Consumer half of a one-shot slot
#[derive(Debug)]
pub struct ReplyReceiver<T> {
    rx: Receiver<T>,
}

impl<T> ReplyReceiver<T> {
    /// Block until the slot is fulfilled
    ///
    /// Returns `None` if the sender was dropped without sending.
    pub fn wait(self) -> Option<T> {
        self.rx.recv().ok()
    }
}
