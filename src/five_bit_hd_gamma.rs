//! Five-bit HD gamma
//!
//! APA102 style chipsets carry a coarse 5-bit current register next to the
//! 8-bit PWM value of each channel. Scaling colors down in 8 bits alone
//! throws away resolution at low brightness, so this module redistributes
//! brightness between the two: the current register is lowered as far as
//! possible while the color channels are shifted up to keep the product
//! constant.
//!
//! The gamma curve and the whole algorithm can be replaced per strip
//! through [`HdGammaConfig`].

use crate::color::Rgb;
use crate::gamma::gamma16;
use crate::math8::{map16_to_8, max3, scale16by8};

/// Power register value the search starts from
const START_POWER_5BIT: u8 = 0b0001_0000;

/// Maximum value of the 5-bit power register
pub const MAX_POWER_5BIT: u8 = 31;

/// Gamma corrected color plus the 5-bit power register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiveBitColor {
    pub color: Rgb,
    pub power_5bit: u8,
}

impl FiveBitColor {
    /// All channels off, power register off
    pub const BLACK: Self = Self {
        color: Rgb { r: 0, g: 0, b: 0 },
        power_5bit: 0,
    };
}

/// Gamma curve from 8-bit linear color to 16-bit duty cycles
pub type Gamma16Fn = fn(color: Rgb) -> [u16; 3];

/// Complete five-bit algorithm
///
/// Receives the raw color, the per-channel color correction and the
/// global brightness.
pub type HdGammaFn = fn(color: Rgb, color_scale: Rgb, global_brightness: u8) -> FiveBitColor;

/// Five-bit HD strategy of a strip
///
/// Unset fields fall back to the built-in gamma 2.8 curve and the
/// built-in bitshift search.
#[derive(Debug, Clone, Copy, Default)]
pub struct HdGammaConfig {
    /// Replaces the gamma curve of the built-in algorithm
    pub gamma: Option<Gamma16Fn>,
    /// Replaces the whole algorithm, `gamma` is then ignored
    pub algorithm: Option<HdGammaFn>,
}

impl HdGammaConfig {
    /// Built-in curve and algorithm
    pub const fn builtin() -> Self {
        Self {
            gamma: None,
            algorithm: None,
        }
    }

    /// Built-in algorithm with a custom gamma curve
    pub const fn with_gamma(gamma: Gamma16Fn) -> Self {
        Self {
            gamma: Some(gamma),
            algorithm: None,
        }
    }

    /// Fully custom algorithm
    pub const fn with_algorithm(algorithm: HdGammaFn) -> Self {
        Self {
            gamma: None,
            algorithm: Some(algorithm),
        }
    }

    /// Run the configured strategy on one pixel
    #[inline]
    pub fn apply(&self, color: Rgb, color_scale: Rgb, global_brightness: u8) -> FiveBitColor {
        match self.algorithm {
            Some(algorithm) => algorithm(color, color_scale, global_brightness),
            None => five_bit_hd_gamma_bitshift(
                color,
                color_scale,
                global_brightness,
                self.gamma.unwrap_or(gamma16),
            ),
        }
    }
}

/// Gamma correct, color correct and bitshift one pixel
pub fn five_bit_hd_gamma_bitshift(
    color: Rgb,
    color_scale: Rgb,
    global_brightness: u8,
    gamma: Gamma16Fn,
) -> FiveBitColor {
    if global_brightness == 0 {
        return FiveBitColor::BLACK;
    }

    let [mut r16, mut g16, mut b16] = gamma(color);

    // Color correction is applied after gamma; skip the multiply for
    // channels that are not corrected.
    if color_scale.r != 0xFF {
        r16 = scale16by8(r16, color_scale.r);
    }
    if color_scale.g != 0xFF {
        g16 = scale16by8(g16, color_scale.g);
    }
    if color_scale.b != 0xFF {
        b16 = scale16by8(b16, color_scale.b);
    }

    five_bit_bitshift(r16, g16, b16, global_brightness)
}

/// Split 16-bit color and 8-bit brightness into 8-bit color and 5-bit power
pub fn five_bit_bitshift(r16: u16, g16: u16, b16: u16, brightness: u8) -> FiveBitColor {
    if brightness == 0 {
        return FiveBitColor::BLACK;
    }
    if r16 == 0 && g16 == 0 && b16 == 0 {
        // Keep the driver brightness for black pixels
        return FiveBitColor {
            color: Rgb { r: 0, g: 0, b: 0 },
            power_5bit: brightness.min(MAX_POWER_5BIT),
        };
    }

    let (mut r16, mut g16, mut b16) = (r16, g16, b16);
    let mut brightness = brightness;
    let mut power = START_POWER_5BIT;

    // Move power from the register into the driver brightness
    brightness_bitshifter8(&mut power, &mut brightness, 4);

    // Move power from the register into the color channels
    let mut max_component = max3(r16, g16, b16);
    let shifts = brightness_bitshifter16(&mut power, &mut max_component, 4, 2);
    if shifts != 0 {
        r16 <<= shifts;
        g16 <<= shifts;
        b16 <<= shifts;
    }

    if brightness != 0xFF {
        r16 = scale16by8(r16, brightness);
        g16 = scale16by8(g16, brightness);
        b16 = scale16by8(b16, brightness);
    }

    // power is a power of two here; fill the bits below it so the whole
    // register range is used, not only powers of two
    if power > 1 {
        power |= power - 1;
    }

    FiveBitColor {
        color: Rgb {
            r: map16_to_8(r16),
            g: map16_to_8(g16),
            b: map16_to_8(b16),
        },
        power_5bit: power,
    }
}

/// Halve `src` and double `dst` up to `max_shifts` times
///
/// Stops before `dst` overflows or `src` would reach zero, so the product
/// of both stays constant. Returns the number of shifts made.
pub fn brightness_bitshifter8(src: &mut u8, dst: &mut u8, max_shifts: u8) -> u8 {
    let mut from = *src;
    if *dst == 0 || from == 0 {
        return 0;
    }
    let mut to = *dst;
    let mut shifts = 0;
    while shifts < max_shifts && from > 1 {
        if to & 0b1000_0000 != 0 {
            break;
        }
        to <<= 1;
        from >>= 1;
        shifts += 1;
    }
    *dst = to;
    *src = from;
    shifts
}

/// Halve `src` and shift `dst` left by `steps` bits, up to `max_shifts` times
///
/// Stops when `src` is odd or when `dst` would overflow. Returns the
/// number of halvings of `src`.
pub fn brightness_bitshifter16(src: &mut u8, dst: &mut u16, max_shifts: u8, steps: u8) -> u8 {
    let mut from = *src;
    if *dst == 0 || from == 0 {
        return 0;
    }
    let mut overflow_mask: u16 = 0b1000_0000_0000_0000;
    for _ in 1..steps {
        overflow_mask = (overflow_mask >> 1) | 0b1000_0000_0000_0000;
    }
    let mut to = *dst;
    let mut shifts = 0;
    while shifts < max_shifts {
        if from & 0x01 != 0 || to & overflow_mask != 0 {
            break;
        }
        to <<= steps;
        from >>= 1;
        shifts += 1;
    }
    *dst = to;
    *src = from;
    shifts
}
