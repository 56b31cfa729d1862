use crate::{color::Rgb, math8::percent8};

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// Bits above the low 24 are ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Scale every channel of a color by an intensity percentage
///
/// # Arguments
/// * `color` - Color at full intensity
/// * `percent` - Intensity, 0 to 100 inclusive
///
/// # Panics
/// If `percent` is above 100.
#[inline]
pub const fn scale_color(color: Rgb, percent: u8) -> Rgb {
    Rgb {
        r: percent8(color.r, percent),
        g: percent8(color.g, percent),
        b: percent8(color.b, percent),
    }
}
