/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// A scale of 255 returns the value unchanged.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Add two 8-bit values, saturating at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Scale a 16-bit value by an 8-bit factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16by8(value: u16, scale: u8) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 8) as u16
}

/// Expand an 8-bit value to the full 16-bit range (`0xAB` -> `0xABAB`)
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn map8_to_16(value: u8) -> u16 {
    value as u16 * 0x101
}

/// Reduce a 16-bit value to 8 bits with rounding
///
/// Zero stays zero and anything at or above `0xFF00` saturates to 255.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn map16_to_8(value: u16) -> u8 {
    if value == 0 {
        return 0;
    }
    if value >= 0xFF00 {
        return 0xFF;
    }
    ((value + 128) >> 8) as u8
}

/// Largest of three values
#[inline]
pub fn max3<T: Ord>(a: T, b: T, c: T) -> T {
    a.max(b).max(c)
}

/// Smallest of three values
#[inline]
pub fn min3<T: Ord>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}
