//! Register-level protocol for SigmaDSP-style crossover configuration.
//!
//! This crate provides the pieces needed to translate human-meaningful
//! cutoff frequencies into the parameter words a crossover DSP consumes:
//! the filter design math, the fixed-point register codec, and the
//! per-section coefficient layout.
//!
//! It is deliberately transport-free so it can be reused against any
//! parameter memory backend.

pub mod coefficients;
pub use coefficients::{BAND_WORDS, SECTION_WORDS, WORD_BYTES};

pub mod filter;
pub use filter::{BandOrientation, FilterDesign, FilterSection};

pub mod fixed_point;
pub use fixed_point::FixedPoint;

#[cfg(feature = "devices")]
pub mod device;
