//! LPD8806
//!
//! 7-bit channels; bit 7 of every data byte must be set. The frame is
//! closed by zero bytes, one per 64 channel bytes (rounded up).

use crate::sink::ByteSink;

/// Map an 8-bit channel to the 7-bit wire value with the marker bit set
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn lpd8806_adjust(value: u8) -> u8 {
    ((value >> 1) | 0x80) + (value != 0 && value < 0xFE) as u8
}

/// Number of zero latch bytes after `num_leds` LEDs
pub const fn lpd8806_latch_len(num_leds: usize) -> usize {
    (num_leds * 3 + 63) / 64
}

/// Encode LPD8806 pixels
pub fn encode_lpd8806<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    let mut num_leds = 0;
    for pixel in pixels {
        out.write_bytes(&pixel.map(lpd8806_adjust));
        num_leds += 1;
    }
    out.write_repeated(0x00, lpd8806_latch_len(num_leds));
}
