//! This crate provides a high level API for configuring the crossover
//! bands of a SigmaDSP-style loudspeaker processor, together with the
//! rotary-encoder UI state machine that edits them interactively.
//!
//! To get started, wrap your parameter memory backend in a [`Client`]
//! and instantiate a [`Crossover`] over a device definition:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use anyhow::Result;
//! use tokio::sync::Mutex;
//! use xover::{
//!     transport::{mock::MockRam, SharedRam},
//!     Client, Crossover,
//! };
//! use xover_protocol::device::twoway;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ram: SharedRam = Arc::new(Mutex::new(MockRam::default()));
//!     let dsp = Crossover::new(Client::new(ram), &twoway::DEVICE);
//!
//!     // Put the first channel's band between 80 Hz and 2.5 kHz
//!     dsp.channel(0)?.set_cutoffs(80.0, 2500.0).await?;
//!
//!     let cutoffs = dsp.channel(0)?.get_cutoffs().await?;
//!     println!("committed: {:.0} - {:.0} Hz", cutoffs.low, cutoffs.high);
//!
//!     Ok(())
//! }
//! ```

use xover_protocol::{
    coefficients,
    device::{ChannelSpec, Device},
    BandOrientation, FilterDesign, BAND_WORDS, SECTION_WORDS, WORD_BYTES,
};

pub mod client;
pub use client::Client;
pub mod model;
pub use model::CutoffPair;
pub mod settings;
pub mod transport;
pub use transport::XoverError;
pub mod ui;

pub type Result<T, E = XoverError> = core::result::Result<T, E>;

/// High-level crossover configuration API.
#[derive(Clone)]
pub struct Crossover<'a> {
    pub client: Client,
    pub device: &'a Device,

    design: FilterDesign,
    orientation: BandOrientation,
}

impl<'a> Crossover<'a> {
    pub fn new(client: Client, device: &'a Device) -> Self {
        Crossover {
            client,
            device,
            design: FilterDesign::default(),
            orientation: BandOrientation::default(),
        }
    }

    /// Selects the coefficient formulas used for subsequent writes.
    pub fn with_design(mut self, design: FilterDesign) -> Self {
        self.design = design;
        self
    }

    /// Overrides which cutoff parameterizes which section; only needed
    /// for hardware verified to expect the conventional assignment.
    pub fn with_orientation(mut self, orientation: BandOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn design(&self) -> FilterDesign {
        self.design
    }

    /// Gets an object wrapping a channel's bandpass band.
    pub fn channel(&self, index: usize) -> Result<Band<'_>> {
        if index >= self.device.channels.len() {
            Err(XoverError::OutOfRange)
        } else {
            Ok(Band {
                dsp: self,
                spec: &self.device.channels[index],
            })
        }
    }
}

/// Helper object for configuring an on-device bandpass band.
pub struct Band<'a> {
    dsp: &'a Crossover<'a>,
    spec: &'a ChannelSpec,
}

impl Band<'_> {
    pub fn spec(&self) -> &ChannelSpec {
        self.spec
    }

    /// Computes the band's coefficient cascade and writes the 10-word
    /// block at the band's head address.
    ///
    /// Device registers only; persisting the committed pair is the
    /// caller's responsibility.
    pub async fn set_cutoffs(&self, low: f64, high: f64) -> Result<()> {
        let (highpass, lowpass) = self.dsp.design.bandpass(
            low,
            high,
            1.0,
            self.dsp.device.sampling_rate,
            self.dsp.orientation,
        );
        let block = coefficients::band_to_bytes(&highpass, &lowpass);
        self.dsp.client.write_words(self.spec.band, block).await
    }

    /// Reads the band's coefficient block back and reconstructs the
    /// effective cutoff pair.
    ///
    /// Returns [`CutoffPair::UNAVAILABLE`] when the block does not
    /// describe a recoverable filter (e.g. cleared registers); device
    /// I/O failures surface as errors.
    pub async fn get_cutoffs(&self) -> Result<CutoffPair> {
        let words = self.dsp.client.read_words(self.spec.band, BAND_WORDS).await?;

        let head: [[u8; WORD_BYTES]; SECTION_WORDS] = words[..SECTION_WORDS]
            .try_into()
            .map_err(|_| XoverError::MalformedResponse("short coefficient block".to_string()))?;
        let tail: [[u8; WORD_BYTES]; SECTION_WORDS] = words[SECTION_WORDS..]
            .try_into()
            .map_err(|_| XoverError::MalformedResponse("short coefficient block".to_string()))?;

        let highpass = coefficients::words_to_section(&head);
        let lowpass = coefficients::words_to_section(&tail);

        let fs = self.dsp.device.sampling_rate;
        match (
            highpass.cutoff_frequency(fs),
            lowpass.cutoff_frequency(fs),
        ) {
            (Some(hp_cut), Some(lp_cut)) => {
                let (low, high) = self.dsp.orientation.recover(hp_cut, lp_cut);
                Ok(CutoffPair::new(low, high))
            }
            _ => {
                log::warn!(
                    "band at {:#06x} holds no recoverable cutoffs",
                    self.spec.band
                );
                Ok(CutoffPair::UNAVAILABLE)
            }
        }
    }
}
