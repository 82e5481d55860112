//! WS2812 family (clockless)
//!
//! Channel bytes go out back to back in wire order, with no framing.
//! The reset gap between frames is produced by the transport.

use crate::sink::ByteSink;

/// Encode 3-channel pixels
pub fn encode_ws2812_rgb<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    for pixel in pixels {
        out.write_bytes(&pixel);
    }
}

/// Encode 4-channel pixels, white already placed
pub fn encode_ws2812_rgbw<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 4]>,
    S: ByteSink + ?Sized,
{
    for pixel in pixels {
        out.write_bytes(&pixel);
    }
}
