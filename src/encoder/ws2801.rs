//! WS2801 and WS2803
//!
//! Both chips take one raw triplet per LED, clocked in without any frame
//! markers. The latch is a pause on the clock line.

use crate::sink::ByteSink;

/// Encode WS2801 pixels
pub fn encode_ws2801<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    for pixel in pixels {
        out.write_bytes(&pixel);
    }
}

/// Encode WS2803 pixels
///
/// Same wire format as [`encode_ws2801`].
pub fn encode_ws2803<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    encode_ws2801(pixels, out);
}
