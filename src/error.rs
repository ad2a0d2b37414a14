//! Error types for SoloKV
//!
//! Provides a unified error type for all operations.
//!
//! A missing or expired key is not an error: `get` reports it as `Ok(None)`.

use thiserror::Error;

/// Result type alias using SoloError
pub type Result<T> = std::result::Result<T, SoloError>;

/// Unified error type for SoloKV operations
#[derive(Debug, Error)]
pub enum SoloError {
    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid key: keys must be non-empty")]
    InvalidKey,

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    /// The executor is draining or stopped and accepts no new commands
    #[error("Engine is shut down")]
    ShutDown,

    #[error("Failed to spawn executor thread: {0}")]
    ExecutorSpawn(#[from] std::io::Error),

    #[error("Executor thread panicked")]
    ExecutorPanicked,
}
