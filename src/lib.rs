//! # SoloKV
//!
//! An in-memory key-value store with:
//! - A single executor thread that exclusively owns all data
//! - A FIFO command queue shared by any number of caller threads
//! - One-shot reply slots for blocking reads
//! - Lazy TTL expiry, applied when a read finds a dead entry
//! - Graceful shutdown that drains every queued command
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Caller Threads                          │
//! │            set / set_with_ttl / del / get                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ enqueue (Mutex + Condvar)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Command Channel                            │
//! │                 (FIFO, many → one)                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ drain_or_wait
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Executor                                │
//! │                (single owner thread)                         │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌──────────────────┐
//!   │   Entry Store   │               │  Reply Slots     │
//!   │  (no locking)   │               │  (one-shot)      │
//!   └─────────────────┘               └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod channel;
pub mod command;
pub mod executor;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SoloError, Result};
pub use config::Config;
pub use channel::ExecutorState;
pub use engine::Engine;
pub use executor::ExecutorReport;
pub use store::StoreStats;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SoloKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
