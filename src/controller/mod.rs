//! Stateful cursor over a pixel buffer
//!
//! A [`PixelController`] walks a borrowed buffer once per frame and
//! produces wire ordered, scaled and dithered channel bytes on demand.
//! It is monomorphized per color order; drivers reach it through the
//! type-erased [`PixelIterator`](crate::PixelIterator).

mod dither;

use core::marker::PhantomData;

pub use dither::{DITHER_BITS, DitherMode, DitherPhase};
use dither::Dither;

use crate::color::{Rgb, Rgbw, WireOrder, rgb_to_rgbw};
use crate::math8::scale8;
#[cfg(feature = "hd-color-mixing")]
use crate::pixel_iterator::HdLoad;
use crate::pixel_iterator::PixelSource;

/// Neutral color correction or temperature
pub const UNCORRECTED: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Per-frame color scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAdjustment {
    /// Correction, temperature and brightness combined
    pub premixed: Rgb,
    /// Correction and temperature without brightness
    pub color: Rgb,
    /// Global brightness
    pub brightness: u8,
}

impl ColorAdjustment {
    /// Adjustment that leaves every channel untouched
    pub const fn neutral() -> Self {
        Self {
            premixed: UNCORRECTED,
            color: UNCORRECTED,
            brightness: 255,
        }
    }

    /// Combine brightness, color correction and color temperature
    pub fn compute(brightness: u8, correction: Rgb, temperature: Rgb) -> Self {
        Self {
            premixed: mix(correction, temperature, brightness),
            color: mix(correction, temperature, 255),
            brightness,
        }
    }

    /// Brightness only, no correction
    pub fn uncorrected(brightness: u8) -> Self {
        Self::compute(brightness, UNCORRECTED, UNCORRECTED)
    }
}

impl Default for ColorAdjustment {
    fn default() -> Self {
        Self::neutral()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn mix(correction: Rgb, temperature: Rgb, scale: u8) -> Rgb {
    let channel = |cc: u8, ct: u8| -> u8 {
        if cc == 0 || ct == 0 {
            return 0;
        }
        let work = (u32::from(cc) + 1) * (u32::from(ct) + 1) * u32::from(scale);
        (work >> 16) as u8
    };
    Rgb {
        r: channel(correction.r, temperature.r),
        g: channel(correction.g, temperature.g),
        b: channel(correction.b, temperature.b),
    }
}

#[derive(Debug, Clone, Copy)]
enum PixelData<'a> {
    Buffer(&'a [Rgb]),
    Solid(Rgb),
}

/// Cursor over one frame of pixels in color order `O`
#[derive(Debug)]
pub struct PixelController<'a, O: WireOrder> {
    data: PixelData<'a>,
    len: usize,
    index: usize,
    adjustment: ColorAdjustment,
    dither: Dither,
    _order: PhantomData<O>,
}

impl<'a, O: WireOrder> PixelController<'a, O> {
    /// Create a controller over a pixel buffer, without dithering
    pub fn new(pixels: &'a [Rgb], adjustment: ColorAdjustment) -> Self {
        Self {
            data: PixelData::Buffer(pixels),
            len: pixels.len(),
            index: 0,
            adjustment,
            dither: Dither::none(),
            _order: PhantomData,
        }
    }

    /// Create a controller repeating one color `count` times
    pub fn solid(color: Rgb, count: usize, adjustment: ColorAdjustment) -> Self {
        Self {
            data: PixelData::Solid(color),
            len: count,
            index: 0,
            adjustment,
            dither: Dither::none(),
            _order: PhantomData,
        }
    }

    /// Enable dithering for this frame
    ///
    /// Advances `phase` by one frame when dithering is on.
    #[must_use]
    pub fn with_dither(mut self, mode: DitherMode, phase: &mut DitherPhase) -> Self {
        self.dither = match mode {
            DitherMode::Disabled => Dither::none(),
            DitherMode::Binary => {
                let premixed = self.adjustment.premixed;
                Dither::binary(phase.next_frame(), [premixed.r, premixed.g, premixed.b])
            }
        };
        self
    }

    /// Color scaling applied to this frame
    pub const fn adjustment(&self) -> ColorAdjustment {
        self.adjustment
    }

    /// Pixels left in this pass
    pub const fn remaining(&self) -> usize {
        self.len - self.index
    }

    #[inline]
    fn raw(&self) -> [u8; 3] {
        debug_assert!(self.index < self.len, "pixel loaded past the end of the frame");
        let pixel = match self.data {
            PixelData::Buffer(pixels) => pixels[self.index],
            PixelData::Solid(color) => color,
        };
        [pixel.r, pixel.g, pixel.b]
    }
}

impl<O: WireOrder> PixelSource for PixelController<'_, O> {
    #[inline]
    fn has(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    #[inline]
    fn load_and_scale_rgb(&mut self) -> [u8; 3] {
        let raw = self.raw();
        let premixed = self.adjustment.premixed;
        let scale = [premixed.r, premixed.g, premixed.b];
        let mut out = [0; 3];
        for (slot, value) in out.iter_mut().enumerate() {
            let channel = O::ORDER.byte(slot);
            *value = scale8(self.dither.apply(channel, raw[channel]), scale[channel]);
        }
        out
    }

    fn load_and_scale_rgbw(&mut self, rgbw: Rgbw) -> [u8; 4] {
        let premixed = self.adjustment.premixed;
        let [r, g, b, w] = rgb_to_rgbw(
            rgbw.mode,
            rgbw.white_color_temp,
            self.raw(),
            [premixed.r, premixed.g, premixed.b],
        );
        let color = O::ORDER.reorder_raw([r, g, b]);
        rgbw.white_placement.place(color, w)
    }

    #[cfg(feature = "hd-color-mixing")]
    fn load_rgb_scale_and_brightness(&mut self) -> HdLoad {
        let color = self.adjustment.color;
        HdLoad {
            rgb: O::ORDER.reorder_raw(self.raw()),
            scale: O::ORDER.reorder(color),
            brightness: self.adjustment.brightness,
        }
    }

    #[inline]
    fn step_dithering(&mut self) {
        self.dither.step();
    }

    #[inline]
    fn advance_data(&mut self) {
        if self.index < self.len {
            self.index += 1;
        }
    }

    fn size(&self) -> usize {
        self.len
    }
}
