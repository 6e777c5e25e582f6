//! Error types for the countdown engine
//!
//! Commands check their preconditions on entry and reject violations with a
//! typed error instead of mutating state. Nothing here is retryable.

use thiserror::Error;

/// Errors returned by countdown engine commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Command issued in a phase that forbids it
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Duration or tick interval outside the accepted range
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}
