//! LPD6803
//!
//! 16 bits per LED: a marker bit and three 5-bit channels, big-endian.
//! Frames are preceded by 32 zero bits and followed by one `FF 00 00 00`
//! word per started group of 32 LEDs.

use crate::sink::ByteSink;

/// Length of the zero start boundary
pub const LPD6803_START_FRAME_LEN: usize = 4;

/// Word repeated after the LED frames
pub const LPD6803_END_WORD: [u8; 4] = [0xFF, 0x00, 0x00, 0x00];

/// Pack one pixel into its 16-bit command
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn lpd6803_command(c0: u8, c1: u8, c2: u8) -> u16 {
    0x8000 | ((c0 as u16 & 0xF8) << 7) | ((c1 as u16 & 0xF8) << 2) | (c2 as u16 >> 3)
}

/// Number of end words after `num_leds` LEDs
pub const fn lpd6803_end_words(num_leds: usize) -> usize {
    num_leds / 32 + 1
}

/// Encode LPD6803 pixels
pub fn encode_lpd6803<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    out.write_repeated(0x00, LPD6803_START_FRAME_LEN);
    let mut num_leds = 0;
    for [c0, c1, c2] in pixels {
        out.write_bytes(&lpd6803_command(c0, c1, c2).to_be_bytes());
        num_leds += 1;
    }
    for _ in 0..lpd6803_end_words(num_leds) {
        out.write_bytes(&LPD6803_END_WORD);
    }
}
