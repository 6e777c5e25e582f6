//! Egg Timer - a state-managed countdown timer engine
//!
//! This library provides a countdown state machine and the engine that owns
//! it: preset duration selection, start/pause semantics, tick-driven progress,
//! and reactive publication of the remaining-time readout to subscribers.

pub mod config;
pub mod error;
pub mod presets;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::{CountdownEngine, CountdownPhase, TimerSnapshot};
pub use tasks::{TickCallback, TickHandle, TickSource, TokioTicker};
pub use utils::shutdown_signal;
