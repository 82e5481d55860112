//! Byte sinks the encoders write into
//!
//! Encoders push one byte at a time and never fail. Sinks that can fail
//! remember the first problem and report it from `finish()`.

use embedded_hal::spi::SpiBus;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;
use snafu::ensure;

use crate::error::{OverflowSnafu, SinkError};

/// Size of the stash used by [`SpiSink`]
pub const SPI_CHUNK_SIZE: usize = 32;

/// Destination of encoded wire bytes
pub trait ByteSink {
    /// Append one byte
    fn write_byte(&mut self, byte: u8);

    /// Append a run of bytes
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Append `count` copies of `byte`
    fn write_repeated(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            self.write_byte(byte);
        }
    }
}

/// Fixed capacity frame buffer
///
/// Bytes past the capacity are counted and dropped.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    dropped: usize,
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            dropped: 0,
        }
    }

    /// Bytes written so far
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes stored
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing was stored
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Maximum number of bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of bytes dropped because the buffer was full
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Reset the buffer for the next frame
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.dropped = 0;
    }

    /// The complete frame, or an error if any byte was dropped
    pub fn finish(&self) -> Result<&[u8], SinkError> {
        ensure!(
            self.dropped == 0,
            OverflowSnafu {
                required: self.bytes.len() + self.dropped,
                capacity: N,
            }
        );
        Ok(&self.bytes)
    }
}

impl<const N: usize> ByteSink for FrameBuffer<N> {
    fn write_byte(&mut self, byte: u8) {
        if self.bytes.push(byte).is_err() {
            #[cfg(feature = "esp32-log")]
            if self.dropped == 0 {
                println!("[FrameBuffer] capacity of {} bytes exceeded", N);
            }
            self.dropped += 1;
        }
    }
}

/// Streams bytes to an SPI bus in small chunks
///
/// Write errors are kept and returned by [`SpiSink::finish`]; bytes after
/// the first error are discarded.
pub struct SpiSink<SPI: SpiBus<u8>> {
    spi: SPI,
    stash: Vec<u8, SPI_CHUNK_SIZE>,
    error: Option<SPI::Error>,
}

impl<SPI: SpiBus<u8>> SpiSink<SPI> {
    /// Start a transaction on the bus
    pub const fn new(spi: SPI) -> Self {
        Self {
            spi,
            stash: Vec::new(),
            error: None,
        }
    }

    fn flush_stash(&mut self) {
        if self.stash.is_empty() {
            return;
        }
        if self.error.is_none() {
            if let Err(error) = self.spi.write(&self.stash) {
                self.error = Some(error);
            }
        }
        self.stash.clear();
    }

    /// End the transaction and give the bus back
    pub fn finish(mut self) -> Result<SPI, SPI::Error> {
        self.flush_stash();
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.spi.flush()?;
        Ok(self.spi)
    }
}

impl<SPI: SpiBus<u8>> ByteSink for SpiSink<SPI> {
    fn write_byte(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        let pushed = self.stash.push(byte);
        debug_assert!(pushed.is_ok(), "stash is flushed as soon as it fills up");
        if self.stash.is_full() {
            self.flush_stash();
        }
    }
}
