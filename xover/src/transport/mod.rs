//! Parameter memory access traits
//!
//! The rest of the crate talks to the DSP exclusively through
//! [`ParameterRam`], so the physical bus (I2C, SPI, a simulator) stays
//! a swappable backend.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::sync::Mutex;

#[cfg(feature = "mock")]
pub mod mock;

pub type SharedRam = Arc<Mutex<dyn ParameterRam>>;

#[derive(Error, Debug)]
pub enum XoverError {
    #[error("Device I/O error: {0}")]
    DeviceIo(String),

    #[error("A malformed response was received: {0}")]
    MalformedResponse(String),

    #[error("Specified channel or band is out of range")]
    OutOfRange,

    #[error("Settings store error: {0}")]
    Persistence(String),
}

/// Word-addressed access to the DSP's live coefficient memory.
///
/// Addresses are parameter-word indices; lengths are in bytes, matching
/// the underlying bus driver contract.
#[async_trait]
pub trait ParameterRam: Send {
    async fn read(&mut self, byte_len: usize, addr: u16) -> Result<Bytes, XoverError>;
    async fn write(&mut self, bytes: &[u8], addr: u16) -> Result<(), XoverError>;
}
