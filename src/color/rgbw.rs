//! White channel synthesis for RGBW strips
//!
//! The white value is derived from the color components after the
//! per-channel scale is applied. How much of the shared component moves
//! into the white LED is decided by [`RgbwMode`].

use crate::math8::{min3, scale8};

/// Default white LED color temperature, in Kelvin
pub const DEFAULT_WHITE_COLOR_TEMP: u16 = 6000;

/// Custom white synthesis
///
/// Receives the white color temperature, the raw `[r, g, b]` components and
/// the per-channel scale. Returns scaled `[r, g, b, w]`.
pub type RgbwFn = fn(white_color_temp: u16, rgb: [u8; 3], scale: [u8; 3]) -> [u8; 4];

/// Policy used to derive the white channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RgbwMode {
    /// RGBW output disabled
    #[default]
    Invalid,
    /// Always send zero on the white channel
    NullWhitePixel,
    /// Move the shared component to white, keeping the hue exact
    ExactColors,
    /// Like exact colors, but with a softer white curve
    BoostedWhite,
    /// Keep the full color and add the shared component as white
    MaxBrightness,
    /// User supplied conversion
    Custom(RgbwFn),
}

/// Position of the white byte in the 4-byte wire frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WhitePlacement {
    /// White first
    W0,
    /// White second
    W1,
    /// White third
    W2,
    /// White last
    #[default]
    W3,
}

impl WhitePlacement {
    /// Insert the white byte into three wire ordered color bytes
    #[inline]
    pub const fn place(self, color: [u8; 3], white: u8) -> [u8; 4] {
        let [b0, b1, b2] = color;
        match self {
            WhitePlacement::W0 => [white, b0, b1, b2],
            WhitePlacement::W1 => [b0, white, b1, b2],
            WhitePlacement::W2 => [b0, b1, white, b2],
            WhitePlacement::W3 => [b0, b1, b2, white],
        }
    }
}

/// RGBW configuration of a strip
///
/// Built once per controller and passed by value down the pixel chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgbw {
    pub mode: RgbwMode,
    pub white_placement: WhitePlacement,
    pub white_color_temp: u16,
}

impl Rgbw {
    /// RGBW disabled
    pub const fn disabled() -> Self {
        Self {
            mode: RgbwMode::Invalid,
            white_placement: WhitePlacement::W3,
            white_color_temp: DEFAULT_WHITE_COLOR_TEMP,
        }
    }

    /// RGBW enabled with the given mode and white position
    pub const fn new(mode: RgbwMode, white_placement: WhitePlacement) -> Self {
        Self {
            mode,
            white_placement,
            white_color_temp: DEFAULT_WHITE_COLOR_TEMP,
        }
    }

    /// Whether a white channel is produced at all
    pub const fn is_active(&self) -> bool {
        !matches!(self.mode, RgbwMode::Invalid)
    }
}

impl Default for Rgbw {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Convert raw RGB into scaled RGBW
///
/// Returns `[r, g, b, w]` in source order; placing white on the wire is
/// up to the caller.
pub fn rgb_to_rgbw(mode: RgbwMode, white_color_temp: u16, rgb: [u8; 3], scale: [u8; 3]) -> [u8; 4] {
    let scaled = [
        scale8(rgb[0], scale[0]),
        scale8(rgb[1], scale[1]),
        scale8(rgb[2], scale[2]),
    ];
    match mode {
        RgbwMode::Invalid | RgbwMode::NullWhitePixel => [scaled[0], scaled[1], scaled[2], 0],
        RgbwMode::ExactColors => {
            let w = min3(scaled[0], scaled[1], scaled[2]);
            [scaled[0] - w, scaled[1] - w, scaled[2] - w, w]
        }
        RgbwMode::BoostedWhite => {
            let min = min3(scaled[0], scaled[1], scaled[2]);
            // Squared curve keeps some of the shared component in RGB at
            // low levels, where the white LED alone looks too cold.
            let w = scale8(min, min);
            [scaled[0] - w, scaled[1] - w, scaled[2] - w, w]
        }
        RgbwMode::MaxBrightness => {
            let w = min3(scaled[0], scaled[1], scaled[2]);
            [scaled[0], scaled[1], scaled[2], w]
        }
        RgbwMode::Custom(convert) => convert(white_color_temp, rgb, scale),
    }
}
