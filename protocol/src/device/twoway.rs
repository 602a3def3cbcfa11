//! Stereo two-way crossover layout
//!
//! Two channels, one bandpass band each. The band blocks are laid out
//! back to back at the start of parameter memory, matching the
//! compiled DSP program's cell placement.

use super::{ChannelSpec, Device};
use crate::{filter::SAMPLING_RATE_DEFAULT, BAND_WORDS};

pub const DEVICE: Device = Device {
    product_name: "2-Way Crossover",
    sampling_rate: SAMPLING_RATE_DEFAULT,
    channels: &[
        ChannelSpec {
            label: "CH1",
            band: 0x0000,
            default_low: 100.0,
            default_high: 1000.0,
        },
        ChannelSpec {
            label: "CH2",
            band: BAND_WORDS as u16,
            default_low: 1000.0,
            default_high: 10_000.0,
        },
    ],
};
