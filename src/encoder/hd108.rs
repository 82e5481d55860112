//! HD108
//!
//! Frame layout:
//!
//! ```text
//! 00 * 8 | (header_hi header_lo r_hi r_lo g_hi g_lo b_hi b_lo) ... | FF * (N / 2 + 4)
//! ```
//!
//! The 16-bit header is a start bit followed by three 5-bit gains.
//! Gains stay at their maximum; brightness lives in the 16-bit channels.

use crate::five_bit_hd_gamma::MAX_POWER_5BIT;
use crate::sink::ByteSink;

/// Length of the all-zero start frame
pub const HD108_START_FRAME_LEN: usize = 8;

/// Gain used for every channel
pub const HD108_DEFAULT_GAIN: u8 = MAX_POWER_5BIT;

/// Number of `0xFF` bytes after `num_leds` LEDs
pub const fn hd108_end_frame_len(num_leds: usize) -> usize {
    num_leds / 2 + 4
}

/// Per-LED header carrying the three 5-bit channel gains
pub const fn hd108_header(r_gain: u8, g_gain: u8, b_gain: u8) -> [u8; 2] {
    let (r, g, b) = (r_gain & 0x1F, g_gain & 0x1F, b_gain & 0x1F);
    [0x80 | (r << 2) | (g >> 3), ((g & 0x07) << 5) | b]
}

/// Encode 16-bit pixels with all gains at maximum
pub fn encode_hd108<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u16; 3]>,
    S: ByteSink + ?Sized,
{
    let header = hd108_header(HD108_DEFAULT_GAIN, HD108_DEFAULT_GAIN, HD108_DEFAULT_GAIN);

    out.write_repeated(0x00, HD108_START_FRAME_LEN);
    let mut num_leds = 0;
    for pixel in pixels {
        out.write_bytes(&header);
        for channel in pixel {
            out.write_bytes(&channel.to_be_bytes());
        }
        num_leds += 1;
    }
    out.write_repeated(0xFF, hd108_end_frame_len(num_leds));
}
