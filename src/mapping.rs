//! Coordinate to LED index translation
//!
//! Each tile is wired column by column. The strip enters a tile at the bottom
//! of its first column and climbs every column in turn. On a serpentine chain
//! every odd tile is mounted the other way round, so the strip runs along the
//! rows top-down instead.
//!
//! ```text
//! Line, one tile (LED index per cell):
//!
//!   y=0   7 15 23 ...
//!   y=1   6 14 22 ...
//!   ...
//!   y=7   0  8 16 ...
//! ```

use crate::bounds::{LEDS_PER_TILE, TILE_SIZE};

const ORIENTATION_NAME_LINE: &str = "line";
const ORIENTATION_NAME_SERPENTINE: &str = "serpentine";

const ORIENTATION_ID_LINE: u8 = 0;
const ORIENTATION_ID_SERPENTINE: u8 = 1;

/// Alternative spellings accepted for serpentine wiring.
const SERPENTINE_ALIASES: [&str; 2] = ["zigzag", "ziczac"];

/// How consecutive tiles are wired relative to each other
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Every tile is wired the same way
    Line = ORIENTATION_ID_LINE,
    /// Odd tiles are wired in reverse
    #[default]
    Serpentine = ORIENTATION_ID_SERPENTINE,
}

impl Orientation {
    /// Orientation for a raw wiring id, if it is known
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ORIENTATION_ID_LINE => Self::Line,
            ORIENTATION_ID_SERPENTINE => Self::Serpentine,
            _ => return None,
        })
    }

    /// Canonical orientation name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => ORIENTATION_NAME_LINE,
            Self::Serpentine => ORIENTATION_NAME_SERPENTINE,
        }
    }

    /// Parse an orientation name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case(ORIENTATION_NAME_LINE) {
            return Some(Self::Line);
        }
        if s.eq_ignore_ascii_case(ORIENTATION_NAME_SERPENTINE)
            || SERPENTINE_ALIASES
                .iter()
                .any(|alias| s.eq_ignore_ascii_case(alias))
        {
            return Some(Self::Serpentine);
        }
        None
    }

    /// Returns whether the given tile is wired in reverse
    pub const fn is_reversed(self, tile: u16) -> bool {
        matches!(self, Self::Serpentine) && tile % 2 == 1
    }
}

/// Map a global `(x, y)` coordinate to its index on the strip
///
/// No bounds are checked against the chain length; use
/// [`ChainBounds::led_index`](crate::bounds::ChainBounds::led_index) for that.
///
/// # Panics
/// If `y` is not a row of a tile.
pub const fn map_led(x: u16, y: u8, orientation: Orientation) -> usize {
    assert!((y as u16) < TILE_SIZE, "row outside the tile");
    let tile = x / TILE_SIZE;
    let local_x = (x % TILE_SIZE) as usize;
    let y = y as usize;
    let size = TILE_SIZE as usize;

    let local_pos = if orientation.is_reversed(tile) {
        local_x + size * y
    } else {
        (size - 1 - y) + size * local_x
    };

    LEDS_PER_TILE * tile as usize + local_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_column_climbs_from_the_bottom() {
        assert_eq!(map_led(0, 7, Orientation::Line), 0);
        assert_eq!(map_led(0, 0, Orientation::Line), 7);
        assert_eq!(map_led(1, 7, Orientation::Line), 8);
    }

    #[test]
    fn odd_serpentine_tile_runs_along_rows() {
        assert_eq!(map_led(8, 0, Orientation::Serpentine), 64);
        assert_eq!(map_led(9, 0, Orientation::Serpentine), 65);
        assert_eq!(map_led(8, 1, Orientation::Serpentine), 72);
        assert_eq!(map_led(15, 7, Orientation::Serpentine), 127);
    }
}
