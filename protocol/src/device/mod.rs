//! Static device definitions
//!
//! Each supported crossover layout is described by a [`Device`] spec
//! mapping logical channels to the head addresses of their coefficient
//! blocks, together with the compiled-in default cutoffs used on first
//! boot.

pub mod twoway;

/// Defines how the high level api should interact with the device
/// based on its parameter memory layout.
#[derive(Debug)]
pub struct Device {
    /// The name identifying the product, e.g. "2-Way Crossover"
    pub product_name: &'static str,
    /// Internal sampling rate in Hz
    pub sampling_rate: f64,
    /// The definitions for all output channels
    pub channels: &'static [ChannelSpec],
}

/// Defines one output channel and its bandpass band.
#[derive(Debug)]
pub struct ChannelSpec {
    /// Label rendered on the display, e.g. "CH1"
    pub label: &'static str,
    /// Head address of the channel's 10-word coefficient block
    pub band: u16,
    /// Default low cutoff in Hz, applied when no saved state exists
    pub default_low: f64,
    /// Default high cutoff in Hz
    pub default_high: f64,
}
