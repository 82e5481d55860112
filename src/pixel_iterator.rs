//! Type-erased pixel cursor handed to chipset drivers
//!
//! Pixel controllers are monomorphized per color order. Drivers only see
//! a [`PixelIterator`], which holds the controller behind a single
//! `&mut dyn PixelSource`, so driver code is compiled once regardless of
//! how many color orders the application uses.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, Rgbw};
use crate::encoder::{
    Chipset, encode_apa102_hd, encode_hd108, encode_lpd6803, encode_lpd8806, encode_p9813,
    encode_sk9822_hd, encode_sm16716, encode_ws2801, encode_ws2803, encode_ws2812_rgb,
    encode_ws2812_rgbw,
};
#[cfg(feature = "global-brightness")]
use crate::encoder::{encode_apa102_auto_brightness, encode_sk9822_auto_brightness};
#[cfg(not(feature = "global-brightness"))]
use crate::{
    encoder::{encode_apa102, encode_sk9822},
    five_bit_hd_gamma::MAX_POWER_5BIT,
};
use crate::five_bit_hd_gamma::{FiveBitColor, HdGammaConfig};
use crate::gamma::gamma_2_8;
use crate::scaled::{
    scaled_brightness_range, scaled_pixel_range_rgb, scaled_pixel_range_rgb16,
    scaled_pixel_range_rgbw,
};
use crate::sink::ByteSink;

/// Raw pixel with the scaling needed by the five-bit HD path
#[cfg(feature = "hd-color-mixing")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HdLoad {
    /// Unscaled channels, wire order
    pub rgb: [u8; 3],
    /// Color correction, wire order
    pub scale: [u8; 3],
    /// Global brightness
    pub brightness: u8,
}

/// Source of pixels for one frame
///
/// Load functions must only be called after `has(1)` returned true.
/// After loading a pixel call [`step_dithering`](PixelSource::step_dithering)
/// and then [`advance_data`](PixelSource::advance_data), once each.
pub trait PixelSource {
    /// Whether at least `n` pixels remain
    fn has(&self, n: usize) -> bool;

    /// Current pixel, scaled and dithered, in wire order
    fn load_and_scale_rgb(&mut self) -> [u8; 3];

    /// Current pixel with a synthesized white channel
    fn load_and_scale_rgbw(&mut self, rgbw: Rgbw) -> [u8; 4];

    /// Current pixel unscaled, with its color correction and brightness
    #[cfg(feature = "hd-color-mixing")]
    fn load_rgb_scale_and_brightness(&mut self) -> HdLoad;

    /// Move the dither offsets to the next pixel
    fn step_dithering(&mut self);

    /// Move to the next pixel
    fn advance_data(&mut self);

    /// Pixels in the whole pass, not the remaining ones
    fn size(&self) -> usize;
}

/// Type-erased view over one pixel source for one frame
pub struct PixelIterator<'a> {
    source: &'a mut dyn PixelSource,
    rgbw: Rgbw,
    hd_gamma: HdGammaConfig,
}

impl<'a> PixelIterator<'a> {
    pub fn new(source: &'a mut dyn PixelSource, rgbw: Rgbw) -> Self {
        Self {
            source,
            rgbw,
            hd_gamma: HdGammaConfig::builtin(),
        }
    }

    /// Replace the five-bit HD strategy
    #[must_use]
    pub fn with_hd_gamma(mut self, hd_gamma: HdGammaConfig) -> Self {
        self.hd_gamma = hd_gamma;
        self
    }

    #[inline]
    pub fn has(&self, n: usize) -> bool {
        self.source.has(n)
    }

    #[inline]
    pub fn load_and_scale_rgb(&mut self) -> [u8; 3] {
        self.source.load_and_scale_rgb()
    }

    #[inline]
    pub fn load_and_scale_rgbw(&mut self) -> [u8; 4] {
        self.source.load_and_scale_rgbw(self.rgbw)
    }

    #[cfg(feature = "hd-color-mixing")]
    #[inline]
    pub fn load_rgb_scale_and_brightness(&mut self) -> HdLoad {
        self.source.load_rgb_scale_and_brightness()
    }

    /// Current pixel scaled, gamma corrected to 16 bits, in wire order
    #[inline]
    pub fn load_and_scale_rgb16(&mut self) -> [u16; 3] {
        self.load_and_scale_rgb().map(gamma_2_8)
    }

    /// Current pixel through the five-bit HD strategy, in wire order
    pub fn load_five_bit_hd(&mut self) -> FiveBitColor {
        #[cfg(feature = "hd-color-mixing")]
        let (rgb, scale, brightness) = {
            let load = self.source.load_rgb_scale_and_brightness();
            (load.rgb, load.scale, load.brightness)
        };
        #[cfg(not(feature = "hd-color-mixing"))]
        let (rgb, scale, brightness) = (self.source.load_and_scale_rgb(), [0xFF; 3], 0xFF);

        self.hd_gamma.apply(
            Rgb::new(rgb[0], rgb[1], rgb[2]),
            Rgb::new(scale[0], scale[1], scale[2]),
            brightness,
        )
    }

    #[inline]
    pub fn step_dithering(&mut self) {
        self.source.step_dithering();
    }

    #[inline]
    pub fn advance_data(&mut self) {
        self.source.advance_data();
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.source.size()
    }

    pub const fn rgbw(&self) -> Rgbw {
        self.rgbw
    }

    pub fn set_rgbw(&mut self, rgbw: Rgbw) {
        self.rgbw = rgbw;
    }

    pub const fn hd_gamma(&self) -> HdGammaConfig {
        self.hd_gamma
    }

    /// Encode the frame for `chipset`
    ///
    /// `hd_gamma` only matters for chips with a brightness register.
    pub fn write<S: ByteSink + ?Sized>(&mut self, chipset: Chipset, out: &mut S, hd_gamma: bool) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelIterator.write] {} pixels as {}",
            self.size(),
            chipset.as_str()
        );
        match chipset {
            Chipset::Ws2812 => self.write_ws2812(out),
            Chipset::Ws2801 => self.write_ws2801(out),
            Chipset::Ws2803 => self.write_ws2803(out),
            Chipset::Apa102 => self.write_apa102(out, hd_gamma),
            Chipset::Sk9822 => self.write_sk9822(out, hd_gamma),
            Chipset::Hd108 => self.write_hd108(out),
            Chipset::P9813 => self.write_p9813(out),
            Chipset::Lpd8806 => self.write_lpd8806(out),
            Chipset::Lpd6803 => self.write_lpd6803(out),
            Chipset::Sm16716 => self.write_sm16716(out),
        }
    }

    /// WS2812, with a white byte when RGBW is active
    pub fn write_ws2812<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        if self.rgbw.is_active() {
            encode_ws2812_rgbw(scaled_pixel_range_rgbw(self), out);
        } else {
            encode_ws2812_rgb(scaled_pixel_range_rgb(self), out);
        }
    }

    pub fn write_ws2801<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_ws2801(scaled_pixel_range_rgb(self), out);
    }

    pub fn write_ws2803<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_ws2803(scaled_pixel_range_rgb(self), out);
    }

    pub fn write_apa102<S: ByteSink + ?Sized>(&mut self, out: &mut S, hd_gamma: bool) {
        if hd_gamma {
            encode_apa102_hd(scaled_brightness_range(self), out);
            return;
        }
        #[cfg(feature = "global-brightness")]
        encode_apa102_auto_brightness(scaled_pixel_range_rgb(self), out);
        #[cfg(not(feature = "global-brightness"))]
        encode_apa102(scaled_pixel_range_rgb(self), out, MAX_POWER_5BIT);
    }

    pub fn write_sk9822<S: ByteSink + ?Sized>(&mut self, out: &mut S, hd_gamma: bool) {
        if hd_gamma {
            encode_sk9822_hd(scaled_brightness_range(self), out);
            return;
        }
        #[cfg(feature = "global-brightness")]
        encode_sk9822_auto_brightness(scaled_pixel_range_rgb(self), out);
        #[cfg(not(feature = "global-brightness"))]
        encode_sk9822(scaled_pixel_range_rgb(self), out, MAX_POWER_5BIT);
    }

    pub fn write_hd108<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_hd108(scaled_pixel_range_rgb16(self), out);
    }

    pub fn write_p9813<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_p9813(scaled_pixel_range_rgb(self), out);
    }

    pub fn write_lpd8806<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_lpd8806(scaled_pixel_range_rgb(self), out);
    }

    pub fn write_lpd6803<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_lpd6803(scaled_pixel_range_rgb(self), out);
    }

    pub fn write_sm16716<S: ByteSink + ?Sized>(&mut self, out: &mut S) {
        encode_sm16716(scaled_pixel_range_rgb(self), out);
    }
}
