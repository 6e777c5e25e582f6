//! Preset duration catalog
//!
//! The fixed list of starting durations offered to the presentation layer:
//! ten slots in 30-second steps, 30s up to 300s.

use serde::{Deserialize, Serialize};

use crate::state::snapshot::remaining_text;

/// Number of preset slots on offer.
pub const PRESET_SLOTS: u8 = 10;

/// Step between consecutive presets, in milliseconds.
pub const PRESET_STEP_MILLIS: u64 = 30_000;

/// One offered starting duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// Catalog slot, 1 ..= 10
    pub slot: u8,
    /// Duration in milliseconds
    pub millis: u64,
    /// `mm:ss` label, rendered like the countdown readout
    pub label: String,
}

/// Duration of the given catalog slot in milliseconds.
pub fn slot_millis(slot: u8) -> u64 {
    u64::from(slot) * PRESET_STEP_MILLIS
}

/// The full preset catalog, in ascending order.
pub fn catalog() -> Vec<Preset> {
    (1..=PRESET_SLOTS)
        .map(|slot| {
            let millis = slot_millis(slot);
            Preset {
                slot,
                millis,
                label: remaining_text(millis),
            }
        })
        .collect()
}
