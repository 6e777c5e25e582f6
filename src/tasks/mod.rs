//! Background tick scheduling
//!
//! This module contains the periodic tick source that drives a running
//! countdown alongside the embedding application.

pub mod ticker;

// Re-export main types
pub use ticker::{TickCallback, TickHandle, TickSource, TokioTicker};
