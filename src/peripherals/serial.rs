use nrf52840_hal::uarte::{self, Uarte};
use ufmt::uWrite;

// EasyDMA can only read from RAM, so string literals living in flash are
// copied through a stack buffer first
const CHUNK_SIZE: usize = 16;

/// Write-only report link on top of a UARTE peripheral
pub struct SerialReport<T: uarte::Instance> {
    uarte: Uarte<T>,
}

impl<T> SerialReport<T>
where
    T: uarte::Instance,
{
    pub fn new(uarte: Uarte<T>) -> Self {
        SerialReport { uarte }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), uarte::Error> {
        for chunk in bytes.chunks(CHUNK_SIZE) {
            let mut buf = [0u8; CHUNK_SIZE];
            buf[..chunk.len()].copy_from_slice(chunk);
            self.uarte.write(&buf[..chunk.len()])?;
        }
        Ok(())
    }
}

impl<T> uWrite for SerialReport<T>
where
    T: uarte::Instance,
{
    type Error = uarte::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_bytes(s.as_bytes())
    }
}
