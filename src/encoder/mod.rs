//! Chipset wire encoders
//!
//! Every encoder is a plain function from a pixel iterator to bytes pushed
//! into a [`ByteSink`](crate::ByteSink). Pixels arrive already scaled and
//! in wire order; encoders only add the framing of their protocol.
//! An empty pixel range yields just the fixed start and end overhead.

mod apa102;
mod bits;
mod hd108;
mod lpd6803;
mod lpd8806;
mod p9813;
mod sm16716;
mod ws2801;
mod ws2812;

pub use apa102::{
    APA102_LATCH_BYTE, APA102_LED_HEADER, APA102_START_FRAME_LEN, SK9822_LATCH_BYTE,
    apa102_end_frame_len, apa102_led_header, auto_brightness_5bit, encode_apa102,
    encode_apa102_auto_brightness, encode_apa102_hd, encode_sk9822,
    encode_sk9822_auto_brightness, encode_sk9822_hd,
};
pub use bits::BitWriter;
pub use hd108::{
    HD108_DEFAULT_GAIN, HD108_START_FRAME_LEN, encode_hd108, hd108_end_frame_len, hd108_header,
};
pub use lpd6803::{
    LPD6803_END_WORD, LPD6803_START_FRAME_LEN, encode_lpd6803, lpd6803_command,
    lpd6803_end_words,
};
pub use lpd8806::{encode_lpd8806, lpd8806_adjust, lpd8806_latch_len};
pub use p9813::{P9813_BOUNDARY_LEN, encode_p9813, p9813_flag};
pub use sm16716::{SM16716_LATCH_BITS, encode_sm16716};
pub use ws2801::{encode_ws2801, encode_ws2803};
pub use ws2812::{encode_ws2812_rgb, encode_ws2812_rgbw};

use crate::color::ColorOrder;

const CHIPSET_NAME_WS2812: &str = "ws2812";
const CHIPSET_NAME_WS2801: &str = "ws2801";
const CHIPSET_NAME_WS2803: &str = "ws2803";
const CHIPSET_NAME_APA102: &str = "apa102";
const CHIPSET_NAME_SK9822: &str = "sk9822";
const CHIPSET_NAME_HD108: &str = "hd108";
const CHIPSET_NAME_P9813: &str = "p9813";
const CHIPSET_NAME_LPD8806: &str = "lpd8806";
const CHIPSET_NAME_LPD6803: &str = "lpd6803";
const CHIPSET_NAME_SM16716: &str = "sm16716";

/// Supported LED protocols
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chipset {
    Ws2812,
    Ws2801,
    Ws2803,
    /// Also sold as DotStar
    Apa102,
    Sk9822,
    Hd108,
    P9813,
    Lpd8806,
    Lpd6803,
    Sm16716,
}

impl Chipset {
    pub const ALL: [Chipset; 10] = [
        Chipset::Ws2812,
        Chipset::Ws2801,
        Chipset::Ws2803,
        Chipset::Apa102,
        Chipset::Sk9822,
        Chipset::Hd108,
        Chipset::P9813,
        Chipset::Lpd8806,
        Chipset::Lpd6803,
        Chipset::Sm16716,
    ];

    /// Color order the chip expects unless the strip says otherwise
    pub const fn default_order(self) -> ColorOrder {
        match self {
            Chipset::Ws2812 | Chipset::Lpd8806 => ColorOrder::Grb,
            Chipset::Apa102 | Chipset::Sk9822 => ColorOrder::Bgr,
            Chipset::Ws2801
            | Chipset::Ws2803
            | Chipset::Hd108
            | Chipset::P9813
            | Chipset::Lpd6803
            | Chipset::Sm16716 => ColorOrder::Rgb,
        }
    }

    /// Whether the chip has a per-LED brightness register for five-bit HD
    pub const fn supports_hd_gamma(self) -> bool {
        matches!(self, Chipset::Apa102 | Chipset::Sk9822)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Chipset::Ws2812 => CHIPSET_NAME_WS2812,
            Chipset::Ws2801 => CHIPSET_NAME_WS2801,
            Chipset::Ws2803 => CHIPSET_NAME_WS2803,
            Chipset::Apa102 => CHIPSET_NAME_APA102,
            Chipset::Sk9822 => CHIPSET_NAME_SK9822,
            Chipset::Hd108 => CHIPSET_NAME_HD108,
            Chipset::P9813 => CHIPSET_NAME_P9813,
            Chipset::Lpd8806 => CHIPSET_NAME_LPD8806,
            Chipset::Lpd6803 => CHIPSET_NAME_LPD6803,
            Chipset::Sm16716 => CHIPSET_NAME_SM16716,
        }
    }

    /// Parse a chipset name; `dotstar` is accepted for APA102
    pub fn parse_from_str(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("dotstar") {
            return Some(Chipset::Apa102);
        }
        Self::ALL
            .into_iter()
            .find(|chipset| chipset.as_str().eq_ignore_ascii_case(name))
    }
}
