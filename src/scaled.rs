//! Single-pass iterators over a [`PixelIterator`]
//!
//! Each adapter loads one pixel ahead: constructing it pulls the first
//! pixel, and every step pulls the next one until the source runs out.
//! A pass can't be restarted; the source only moves forward.
//!
//! Adapters compare equal when both are at the end, or when both still
//! hold a value and read from the same [`PixelIterator`]. That makes
//! `iter == end` work as the classic end-of-range check.

use core::ptr;

use crate::pixel_iterator::PixelIterator;

/// Pair of a live adapter and its end sentinel
#[derive(Debug, PartialEq)]
pub struct PixelRange<I> {
    pub begin: I,
    pub end: I,
}

impl<I: Iterator> IntoIterator for PixelRange<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        self.begin
    }
}

macro_rules! scaled_pixel_iter {
    (
        $(#[$meta:meta])*
        $name:ident, $item:ty, $range_fn:ident, |$pixels:ident| $load:expr
    ) => {
        $(#[$meta])*
        pub struct $name<'p, 'a> {
            pixels: Option<&'p mut PixelIterator<'a>>,
            current: Option<$item>,
        }

        impl<'p, 'a> $name<'p, 'a> {
            /// Start a pass, loading the first pixel
            pub fn new(pixels: &'p mut PixelIterator<'a>) -> Self {
                let mut iter = Self {
                    pixels: Some(pixels),
                    current: None,
                };
                iter.advance();
                iter
            }

            /// End sentinel
            pub const fn end() -> Self {
                Self {
                    pixels: None,
                    current: None,
                }
            }

            /// Value of the current pixel, `None` at the end
            pub const fn get(&self) -> Option<&$item> {
                self.current.as_ref()
            }

            /// Whether the pass is over
            pub const fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Load the next pixel, or move to the end
            pub fn advance(&mut self) {
                self.current = match self.pixels.as_deref_mut() {
                    Some($pixels) if $pixels.has(1) => {
                        let value = $load;
                        $pixels.step_dithering();
                        $pixels.advance_data();
                        Some(value)
                    }
                    _ => None,
                };
            }

            fn source(&self) -> Option<*const PixelIterator<'a>> {
                self.pixels.as_deref().map(ptr::from_ref)
            }
        }

        impl Default for $name<'_, '_> {
            fn default() -> Self {
                Self::end()
            }
        }

        impl PartialEq for $name<'_, '_> {
            fn eq(&self, other: &Self) -> bool {
                match (self.is_end(), other.is_end()) {
                    (true, true) => true,
                    (false, false) => self.source() == other.source(),
                    _ => false,
                }
            }
        }

        impl Iterator for $name<'_, '_> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                let value = self.current.take()?;
                self.advance();
                Some(value)
            }
        }

        /// Begin and end of a pass over `pixels`
        pub fn $range_fn<'p, 'a>(pixels: &'p mut PixelIterator<'a>) -> PixelRange<$name<'p, 'a>> {
            PixelRange {
                begin: $name::new(pixels),
                end: $name::end(),
            }
        }
    };
}

scaled_pixel_iter! {
    /// Scaled 3-channel pixels in wire order
    ScaledPixelIterRgb, [u8; 3], scaled_pixel_range_rgb,
    |pixels| pixels.load_and_scale_rgb()
}

scaled_pixel_iter! {
    /// Scaled 4-channel pixels with white in its wire position
    ScaledPixelIterRgbw, [u8; 4], scaled_pixel_range_rgbw,
    |pixels| pixels.load_and_scale_rgbw()
}

scaled_pixel_iter! {
    /// Scaled pixels gamma corrected to 16 bits per channel
    ScaledPixelIterRgb16, [u16; 3], scaled_pixel_range_rgb16,
    |pixels| pixels.load_and_scale_rgb16()
}

scaled_pixel_iter! {
    /// Five-bit HD pixels: gamma corrected color and its 5-bit brightness
    ScaledPixelIterBrightness, ([u8; 3], u8), scaled_brightness_range,
    |pixels| {
        let hd = pixels.load_five_bit_hd();
        ([hd.color.r, hd.color.g, hd.color.b], hd.power_5bit)
    }
}

impl ScaledPixelIterBrightness<'_, '_> {
    /// Only the 5-bit brightness of each remaining pixel
    ///
    /// Colors are still loaded and discarded; the pass moves forward as usual.
    pub fn brightness(self) -> impl Iterator<Item = u8> {
        self.map(|(_, brightness)| brightness)
    }
}
