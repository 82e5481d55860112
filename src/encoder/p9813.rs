//! P9813 (Total Control Lighting)
//!
//! Each LED frame starts with a flag byte built from the inverted top two
//! bits of every channel, followed by the channels in reverse order.
//! Frames are enclosed in 4-byte zero boundaries.

use crate::sink::ByteSink;

/// Length of the zero boundary before and after the LED frames
pub const P9813_BOUNDARY_LEN: usize = 4;

/// Flag byte for a pixel
#[inline]
pub const fn p9813_flag(r: u8, g: u8, b: u8) -> u8 {
    0xC0 | ((!b & 0xC0) >> 2) | ((!g & 0xC0) >> 4) | ((!r & 0xC0) >> 6)
}

/// Encode P9813 pixels
pub fn encode_p9813<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    out.write_repeated(0x00, P9813_BOUNDARY_LEN);
    for [r, g, b] in pixels {
        out.write_bytes(&[p9813_flag(r, g, b), b, g, r]);
    }
    out.write_repeated(0x00, P9813_BOUNDARY_LEN);
}
