//! SM16716
//!
//! Every LED is a `1` start bit followed by 24 color bits, so LED frames
//! drift across byte boundaries. The frame ends with 50 zero bits and is
//! padded with zeros to a whole byte.

use super::bits::BitWriter;
use crate::sink::ByteSink;

/// Zero bits closing a frame
pub const SM16716_LATCH_BITS: usize = 50;

/// Encode SM16716 pixels
pub fn encode_sm16716<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    let mut bits = BitWriter::new(out);
    for pixel in pixels {
        bits.write_bit(true);
        for channel in pixel {
            bits.write_byte(channel);
        }
    }
    bits.write_zeros(SM16716_LATCH_BITS);
    bits.flush();
}
