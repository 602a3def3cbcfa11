//! Provides a mock parameter RAM for testing purposes

use async_trait::async_trait;
use bytes::Bytes;
use xover_protocol::WORD_BYTES;

use super::{ParameterRam, XoverError};

/// Number of parameter words in the emulated core.
pub const PARAM_RAM_WORDS: usize = 1024;

/// In-memory parameter RAM emulation.
///
/// Backs the simulator binary and the integration tests. I/O failures
/// can be injected to exercise the error paths.
pub struct MockRam {
    memory: Vec<u8>,

    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Default for MockRam {
    fn default() -> Self {
        Self {
            memory: vec![0; PARAM_RAM_WORDS * WORD_BYTES],
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl MockRam {
    /// Raw copy of the full parameter memory, for byte-level
    /// comparisons in tests.
    pub fn snapshot(&self) -> Vec<u8> {
        self.memory.clone()
    }

    fn range(&self, byte_len: usize, addr: u16) -> Result<std::ops::Range<usize>, XoverError> {
        let start = addr as usize * WORD_BYTES;
        let end = start + byte_len;
        if end > self.memory.len() {
            return Err(XoverError::DeviceIo(format!(
                "address {:#06x} + {} bytes is outside parameter memory",
                addr, byte_len
            )));
        }
        Ok(start..end)
    }
}

#[async_trait]
impl ParameterRam for MockRam {
    async fn read(&mut self, byte_len: usize, addr: u16) -> Result<Bytes, XoverError> {
        if self.fail_reads {
            return Err(XoverError::DeviceIo("injected read failure".to_string()));
        }
        let range = self.range(byte_len, addr)?;
        Ok(Bytes::copy_from_slice(&self.memory[range]))
    }

    async fn write(&mut self, bytes: &[u8], addr: u16) -> Result<(), XoverError> {
        if self.fail_writes {
            return Err(XoverError::DeviceIo("injected write failure".to_string()));
        }
        let range = self.range(bytes.len(), addr)?;
        self.memory[range].copy_from_slice(bytes);
        Ok(())
    }
}
