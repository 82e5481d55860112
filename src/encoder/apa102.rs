//! APA102 (DotStar) and SK9822
//!
//! Frame layout:
//!
//! ```text
//! 00 00 00 00 | (E0 | bri5) c0 c1 c2 ... | latch * 4 * ceil(N / 32)
//! ```
//!
//! The two chips only differ in the latch byte: `0xFF` for APA102,
//! `0x00` for SK9822.

use core::iter;

use crate::five_bit_hd_gamma::MAX_POWER_5BIT;
use crate::math8::max3;
use crate::sink::ByteSink;

/// Length of the all-zero start frame
pub const APA102_START_FRAME_LEN: usize = 4;

/// Top three bits of every LED frame
pub const APA102_LED_HEADER: u8 = 0b1110_0000;

/// APA102 latch byte
pub const APA102_LATCH_BYTE: u8 = 0xFF;

/// SK9822 latch byte
pub const SK9822_LATCH_BYTE: u8 = 0x00;

/// Number of latch bytes after `num_leds` LEDs
pub const fn apa102_end_frame_len(num_leds: usize) -> usize {
    num_leds.div_ceil(32) * 4
}

/// Brightness byte for a 5-bit value
#[inline]
pub const fn apa102_led_header(brightness_5bit: u8) -> u8 {
    APA102_LED_HEADER | (brightness_5bit & MAX_POWER_5BIT)
}

fn encode_frame<I, S>(pixels: I, out: &mut S, latch: u8)
where
    I: IntoIterator<Item = ([u8; 3], u8)>,
    S: ByteSink + ?Sized,
{
    out.write_repeated(0x00, APA102_START_FRAME_LEN);
    let mut num_leds = 0;
    for ([c0, c1, c2], brightness) in pixels {
        out.write_bytes(&[apa102_led_header(brightness), c0, c1, c2]);
        num_leds += 1;
    }
    out.write_repeated(latch, apa102_end_frame_len(num_leds));
}

/// Global brightness for a frame, taken from its first pixel
///
/// Returns the 5-bit value large enough to show the brightest channel
/// of the pixel. Black pixels keep full brightness.
#[allow(clippy::cast_possible_truncation)]
pub fn auto_brightness_5bit(first: [u8; 3]) -> u8 {
    let max = u16::from(max3(first[0], first[1], first[2]));
    if max == 0 {
        return MAX_POWER_5BIT;
    }
    (max * u16::from(MAX_POWER_5BIT)).div_ceil(255) as u8
}

/// Stretch a channel of the first pixel to make up for a reduced 5-bit
/// brightness
///
/// The brightness was derived from this same pixel, so the result stays
/// within 8 bits.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn stretch(value: u8, brightness_5bit: u8) -> u8 {
    let stretched = u16::from(value) * u16::from(MAX_POWER_5BIT) / u16::from(brightness_5bit);
    stretched.min(0xFF) as u8
}

/// Every LED shares the header derived from the first pixel. Only the first
/// color is stretched; later colors go out unchanged.
fn encode_auto_brightness<I, S>(pixels: I, out: &mut S, latch: u8)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    let mut pixels = pixels.into_iter();
    let Some(first) = pixels.next() else {
        encode_frame(iter::empty::<([u8; 3], u8)>(), out, latch);
        return;
    };
    let brightness = auto_brightness_5bit(first);
    let first = first.map(|c| stretch(c, brightness));
    let frame = iter::once(first)
        .chain(pixels)
        .map(|pixel| (pixel, brightness));
    encode_frame(frame, out, latch);
}

/// APA102 with one brightness for every LED
pub fn encode_apa102<I, S>(pixels: I, out: &mut S, brightness_5bit: u8)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    let frame = pixels.into_iter().map(|pixel| (pixel, brightness_5bit));
    encode_frame(frame, out, APA102_LATCH_BYTE);
}

/// APA102 with a brightness per LED
///
/// Takes pairs of color and 5-bit brightness; a separate brightness
/// range can be paired up with `colors.zip(brightness)`.
pub fn encode_apa102_hd<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = ([u8; 3], u8)>,
    S: ByteSink + ?Sized,
{
    encode_frame(pixels, out, APA102_LATCH_BYTE);
}

/// APA102 with the brightness register derived from the first pixel
pub fn encode_apa102_auto_brightness<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    encode_auto_brightness(pixels, out, APA102_LATCH_BYTE);
}

/// SK9822 with one brightness for every LED
pub fn encode_sk9822<I, S>(pixels: I, out: &mut S, brightness_5bit: u8)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    let frame = pixels.into_iter().map(|pixel| (pixel, brightness_5bit));
    encode_frame(frame, out, SK9822_LATCH_BYTE);
}

/// SK9822 with a brightness per LED
pub fn encode_sk9822_hd<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = ([u8; 3], u8)>,
    S: ByteSink + ?Sized,
{
    encode_frame(pixels, out, SK9822_LATCH_BYTE);
}

/// SK9822 with the brightness register derived from the first pixel
pub fn encode_sk9822_auto_brightness<I, S>(pixels: I, out: &mut S)
where
    I: IntoIterator<Item = [u8; 3]>,
    S: ByteSink + ?Sized,
{
    encode_auto_brightness(pixels, out, SK9822_LATCH_BYTE);
}
