//! Temporal binary dithering
//!
//! Each frame starts from a different phase of a short bit-reversed
//! counter. Within a frame the per-channel offset alternates between `d`
//! and `e - d` from one pixel to the next, so sub-LSB brightness gets
//! spread over neighbouring pixels and consecutive frames.

use crate::math8::scale8;

/// Number of frames in a full dither cycle, as a power of two
pub const DITHER_BITS: u8 = 3;

/// Dithering mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// No dithering
    Disabled,
    /// Binary temporal dithering
    #[default]
    Binary,
}

/// Frame-to-frame dither phase
///
/// Owned by whoever drives consecutive frames; advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DitherPhase {
    counter: u8,
}

impl DitherPhase {
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Advance to the next frame and return its dither signal
    ///
    /// The signal is the bit-reversed counter, centered in its range.
    pub fn next_frame(&mut self) -> u8 {
        self.counter = self.counter.wrapping_add(1) & ((1 << DITHER_BITS) - 1);
        self.counter.reverse_bits() + (1 << (7 - DITHER_BITS))
    }
}

/// Per-frame dither state of a controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Dither {
    /// Current per-channel offset, indexed by source channel
    d: [u8; 3],
    /// Per-channel offset span
    e: [u8; 3],
}

impl Dither {
    /// Dithering that never changes a value
    pub(crate) const fn none() -> Self {
        Self { d: [0; 3], e: [0; 3] }
    }

    /// Derive offsets for a frame from its dither signal and channel scales
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn binary(signal: u8, scale: [u8; 3]) -> Self {
        let mut dither = Self::none();
        for (i, &s) in scale.iter().enumerate() {
            let mut e = if s == 0 { 0 } else { (256 / u16::from(s) + 1) as u8 };
            let mut d = scale8(signal, e);
            if d != 0 {
                d -= 1;
            }
            if e != 0 {
                e -= 1;
            }
            dither.d[i] = d;
            dither.e[i] = e;
        }
        dither
    }

    /// Apply the offset of a source channel to a raw value
    #[inline]
    pub(crate) const fn apply(&self, channel: usize, value: u8) -> u8 {
        if value == 0 {
            0
        } else {
            value.saturating_add(self.d[channel])
        }
    }

    /// Flip offsets for the next pixel
    #[inline]
    pub(crate) fn step(&mut self) {
        for i in 0..3 {
            self.d[i] = self.e[i].wrapping_sub(self.d[i]);
        }
    }
}
