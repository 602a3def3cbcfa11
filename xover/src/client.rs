use bytes::Bytes;
use xover_protocol::{coefficients, WORD_BYTES};

use crate::transport::{SharedRam, XoverError};

/// Word-granular client over a shared parameter RAM handle.
#[derive(Clone)]
pub struct Client {
    ram: SharedRam,
}

impl Client {
    pub fn new(ram: SharedRam) -> Self {
        Self { ram }
    }

    /// Reads `word_count` contiguous parameter words starting at `addr`.
    pub async fn read_words(
        &self,
        addr: u16,
        word_count: usize,
    ) -> Result<Vec<[u8; WORD_BYTES]>, XoverError> {
        let byte_len = word_count * WORD_BYTES;
        let data = {
            let mut ram = self.ram.lock().await;
            ram.read(byte_len, addr).await?
        };
        if data.len() != byte_len {
            return Err(XoverError::MalformedResponse(format!(
                "read {} bytes at {:#06x}, expected {}",
                data.len(),
                addr,
                byte_len
            )));
        }
        Ok(coefficients::split_words(&data))
    }

    /// Writes a whole number of parameter words starting at `addr`.
    ///
    /// Panics on a non word-aligned buffer; that is a coefficient
    /// encoding bug, not a device condition.
    pub async fn write_words(&self, addr: u16, data: Bytes) -> Result<(), XoverError> {
        assert!(
            data.len() % WORD_BYTES == 0,
            "write of {} bytes is not word-aligned",
            data.len()
        );
        let mut ram = self.ram.lock().await;
        ram.write(&data, addr).await
    }
}
