mod order;
mod rgbw;

pub use order::{
    BgrOrder, BrgOrder, ColorOrder, GbrOrder, GrbOrder, RbgOrder, RgbOrder, WireOrder,
};
pub use rgbw::{
    DEFAULT_WHITE_COLOR_TEMP, Rgbw, RgbwFn, RgbwMode, WhitePlacement, rgb_to_rgbw,
};
use smart_leds::RGB8;

pub type Rgb = RGB8;
