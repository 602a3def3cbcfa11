//! Serializable configuration model
//!
//! The shapes exchanged with the persistence layer and any future RPC
//! surface live here, kept separate from the wire-level protocol types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The committed cutoff frequencies of one bandpass band, in Hz.
///
/// The math places no ordering constraint on the pair; sane ranges are
/// the caller's responsibility, typically `low < high`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CutoffPair {
    pub low: f64,
    pub high: f64,
}

impl CutoffPair {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Fixed fallback returned when cutoffs cannot be reconstructed
    /// from device state (e.g. a cleared coefficient block).
    pub const UNAVAILABLE: CutoffPair = CutoffPair {
        low: 0.0,
        high: 0.0,
    };
}
