use crate::sink::ByteSink;

/// MSB-first bit accumulator for protocols that are not byte aligned
///
/// Bits are collected until a byte is full and then written to the sink.
pub struct BitWriter<'s, S: ByteSink + ?Sized> {
    sink: &'s mut S,
    byte: u8,
    count: u8,
}

impl<'s, S: ByteSink + ?Sized> BitWriter<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            byte: 0,
            count: 0,
        }
    }

    /// Append a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.byte = (self.byte << 1) | u8::from(bit);
        self.count += 1;
        if self.count == 8 {
            self.sink.write_byte(self.byte);
            self.byte = 0;
            self.count = 0;
        }
    }

    /// Append a whole byte, most significant bit first
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        if self.count == 0 {
            self.sink.write_byte(byte);
            return;
        }
        for shift in (0..8).rev() {
            self.write_bit(byte & (1 << shift) != 0);
        }
    }

    /// Append `count` zero bits
    pub fn write_zeros(&mut self, count: usize) {
        for _ in 0..count {
            self.write_bit(false);
        }
    }

    /// Bits waiting for the current byte to fill up
    pub const fn pending_bits(&self) -> u8 {
        self.count
    }

    /// Pad the current byte with zeros and write it out
    pub fn flush(&mut self) {
        while self.count != 0 {
            self.write_bit(false);
        }
    }
}
