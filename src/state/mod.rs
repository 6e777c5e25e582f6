//! State management module
//!
//! The countdown state machine, the engine that owns it, and the snapshot
//! published to subscribers.

pub mod countdown;
pub mod engine;
pub mod snapshot;

// Re-export main types
pub use countdown::{CountdownPhase, CountdownState, DEFAULT_TICK_INTERVAL_MILLIS};
pub use engine::CountdownEngine;
pub use snapshot::TimerSnapshot;
