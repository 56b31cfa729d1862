mod utils;

pub use utils::{rgb_from_u32, rgb_to_u32, scale_color};

pub type Rgb = smart_leds::RGB8;

/// Named 24-bit colors (`0xRRGGBB`)
pub mod palette {
    use super::{Rgb, rgb_from_u32};

    pub const WHITE: u32 = 0xFF_FF_FF;
    pub const RED: u32 = 0xFF_00_00;
    pub const BLUE: u32 = 0x00_00_FF;
    pub const YELLOW: u32 = 0xFF_FF_00;
    pub const CYAN: u32 = 0x00_FF_FF;
    pub const MAGENTA: u32 = 0xFF_00_FF;
    pub const ORANGE: u32 = 0xFF_A5_00;
    pub const GREEN: u32 = 0x00_FF_00;
    pub const BLACK: u32 = 0x00_00_00;

    pub const WHITE_RGB: Rgb = rgb_from_u32(WHITE);
    pub const BLACK_RGB: Rgb = rgb_from_u32(BLACK);
}
