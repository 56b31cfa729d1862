/// Upper bound of an intensity percentage
pub const PERCENT_MAX: u8 = 100;

/// Scale an 8-bit value by a percentage (0-100 = 0.0-1.0)
///
/// The result is truncated toward zero, so only 100 reproduces the input
/// exactly and 0 always yields 0.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn percent8(value: u8, percent: u8) -> u8 {
    assert!(percent <= PERCENT_MAX, "intensity must be within 0..=100");
    ((value as u16 * percent as u16) / PERCENT_MAX as u16) as u8
}
