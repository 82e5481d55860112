#![no_std]

pub mod color;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod five_bit_hd_gamma;
pub mod gamma;
pub mod math8;
pub mod pixel_iterator;
pub mod scaled;
pub mod sink;

pub use color::{ColorOrder, Rgb, Rgbw, RgbwMode, WhitePlacement, WireOrder};
pub use controller::{ColorAdjustment, DitherMode, DitherPhase, PixelController};
pub use encoder::Chipset;
pub use error::SinkError;
pub use five_bit_hd_gamma::{FiveBitColor, HdGammaConfig, five_bit_bitshift};
pub use pixel_iterator::{PixelIterator, PixelSource};
pub use scaled::{
    PixelRange, ScaledPixelIterBrightness, ScaledPixelIterRgb, ScaledPixelIterRgb16,
    ScaledPixelIterRgbw,
};
pub use sink::{ByteSink, FrameBuffer, SpiSink};

/// Encode one frame of `pixels` for `chipset`
///
/// Convenience for the common case of one strip, one buffer and no
/// dithering: builds the controller in `O` order and writes the frame.
pub fn encode_frame<O, S>(
    chipset: Chipset,
    pixels: &[Rgb],
    adjustment: ColorAdjustment,
    rgbw: Rgbw,
    hd_gamma: bool,
    out: &mut S,
) where
    O: WireOrder + 'static,
    S: ByteSink + ?Sized,
{
    let mut controller = PixelController::<O>::new(pixels, adjustment);
    let mut iter = PixelIterator::new(&mut controller, rgbw);
    iter.write(chipset, out, hd_gamma);
}
