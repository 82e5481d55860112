//! Channel permutations between a pixel buffer and the wire
//!
//! Every order packs three 2-bit source indices, one per wire slot:
//! `(byte0 << 4) | (byte1 << 2) | byte2`, where index 0 is red,
//! 1 is green and 2 is blue.

use crate::color::Rgb;

const ORDER_NAME_RGB: &str = "rgb";
const ORDER_NAME_RBG: &str = "rbg";
const ORDER_NAME_GRB: &str = "grb";
const ORDER_NAME_GBR: &str = "gbr";
const ORDER_NAME_BRG: &str = "brg";
const ORDER_NAME_BGR: &str = "bgr";

/// Permutation of the R, G and B channels on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorOrder {
    #[default]
    Rgb = 0b00_01_10,
    Rbg = 0b00_10_01,
    Grb = 0b01_00_10,
    Gbr = 0b01_10_00,
    Brg = 0b10_00_01,
    Bgr = 0b10_01_00,
}

impl ColorOrder {
    /// All six permutations
    pub const ALL: [ColorOrder; 6] = [
        ColorOrder::Rgb,
        ColorOrder::Rbg,
        ColorOrder::Grb,
        ColorOrder::Gbr,
        ColorOrder::Brg,
        ColorOrder::Bgr,
    ];

    /// Packed representation
    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    /// Decode a packed order, rejecting anything that is not a bijection
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0b00_01_10 => Some(ColorOrder::Rgb),
            0b00_10_01 => Some(ColorOrder::Rbg),
            0b01_00_10 => Some(ColorOrder::Grb),
            0b01_10_00 => Some(ColorOrder::Gbr),
            0b10_00_01 => Some(ColorOrder::Brg),
            0b10_01_00 => Some(ColorOrder::Bgr),
            _ => None,
        }
    }

    /// Source channel sent first
    pub const fn byte0(self) -> usize {
        ((self as u8 >> 4) & 0b11) as usize
    }

    /// Source channel sent second
    pub const fn byte1(self) -> usize {
        ((self as u8 >> 2) & 0b11) as usize
    }

    /// Source channel sent last
    pub const fn byte2(self) -> usize {
        (self as u8 & 0b11) as usize
    }

    /// Source channel for the given wire slot (0..=2)
    pub const fn byte(self, slot: usize) -> usize {
        match slot {
            0 => self.byte0(),
            1 => self.byte1(),
            _ => self.byte2(),
        }
    }

    /// Permute channels of a raw `[r, g, b]` array into wire order
    #[inline]
    pub const fn reorder_raw(self, raw: [u8; 3]) -> [u8; 3] {
        [raw[self.byte0()], raw[self.byte1()], raw[self.byte2()]]
    }

    /// Permute a color into wire order
    #[inline]
    pub const fn reorder(self, color: Rgb) -> [u8; 3] {
        self.reorder_raw([color.r, color.g, color.b])
    }

    /// Name of the order, lowercase
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorOrder::Rgb => ORDER_NAME_RGB,
            ColorOrder::Rbg => ORDER_NAME_RBG,
            ColorOrder::Grb => ORDER_NAME_GRB,
            ColorOrder::Gbr => ORDER_NAME_GBR,
            ColorOrder::Brg => ORDER_NAME_BRG,
            ColorOrder::Bgr => ORDER_NAME_BGR,
        }
    }

    /// Parse an order name, case-insensitive
    pub fn parse_from_str(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(name))
    }
}

/// Compile-time color order
///
/// Pixel controllers are generic over this trait, so the permutation is
/// resolved once per order instead of on every channel load.
pub trait WireOrder {
    const ORDER: ColorOrder;
}

macro_rules! wire_orders {
    ($($name:ident => $order:ident),* $(,)?) => {
        $(
            #[doc = concat!("Marker for [`ColorOrder::", stringify!($order), "`]")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl WireOrder for $name {
                const ORDER: ColorOrder = ColorOrder::$order;
            }
        )*
    };
}

wire_orders! {
    RgbOrder => Rgb,
    RbgOrder => Rbg,
    GrbOrder => Grb,
    GbrOrder => Gbr,
    BrgOrder => Brg,
    BgrOrder => Bgr,
}
