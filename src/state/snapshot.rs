//! Published timer snapshot and remaining-time formatting

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::countdown::CountdownState;

/// Immutable state triple handed to subscribers after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Zero-padded `mm:ss` readout of the remaining time.
    pub remaining_text: String,
    /// Elapsed share of the selected duration, 0.0 ..= 1.0.
    pub completion_fraction: f64,
    /// Whether the countdown is currently ticking.
    pub is_running: bool,
}

impl TimerSnapshot {
    /// Capture the given countdown state.
    pub fn of(state: &CountdownState) -> Self {
        Self {
            remaining_text: remaining_text(state.remaining_millis()),
            completion_fraction: state.completion_fraction(),
            is_running: state.is_running(),
        }
    }
}

impl Default for TimerSnapshot {
    /// The values a subscriber sees before any duration has been selected.
    fn default() -> Self {
        Self {
            remaining_text: remaining_text(0),
            completion_fraction: 0.0,
            is_running: false,
        }
    }
}

/// Render a millisecond count as a zero-padded `mm:ss` clock reading.
///
/// The count is treated as an absolute timestamp and formatted by extracting
/// its minute and second fields, so a remaining time of an hour or more wraps
/// around. The preset catalog tops out at five minutes, where the reading is
/// exact.
pub fn remaining_text(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|instant| instant.format("%M:%S").to_string())
        .unwrap_or_else(|| "00:00".to_string())
}
