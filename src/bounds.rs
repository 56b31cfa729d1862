use crate::mapping::{Orientation, map_led};

/// Side length of one square tile
pub const TILE_SIZE: u16 = 8;

/// Number of LEDs on one tile
pub const LEDS_PER_TILE: usize = (TILE_SIZE * TILE_SIZE) as usize;

/// Longest supported chain
pub const MAX_TILES: u8 = 4;

/// LEDs on the longest supported chain
pub const MAX_LEDS: usize = MAX_TILES as usize * LEDS_PER_TILE;

/// Geometry of a chain of 8x8 tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainBounds {
    tiles: u8,
}

impl ChainBounds {
    /// Create bounds for a chain of `tiles` tiles
    ///
    /// # Panics
    /// If `tiles` is not within `1..=4`.
    pub const fn new(tiles: u8) -> Self {
        assert!(tiles > 0, "a chain needs at least one tile");
        assert!(tiles <= MAX_TILES, "a chain has at most four tiles");
        Self { tiles }
    }

    /// Number of tiles in the chain
    pub const fn tiles(self) -> u8 {
        self.tiles
    }

    /// Number of LEDs in the chain
    pub const fn num_pixels(self) -> usize {
        self.tiles as usize * LEDS_PER_TILE
    }

    /// Number of columns that are physically visible
    pub const fn visible_width(self) -> u16 {
        self.tiles as u16 * TILE_SIZE
    }

    /// Returns whether a column is on the display
    pub const fn contains_x(self, x: u16) -> bool {
        x < self.visible_width()
    }

    /// Map a coordinate to the LED index in wiring order
    ///
    /// # Panics
    /// If the coordinate is outside the chain.
    pub const fn led_index(self, x: u16, y: u8, orientation: Orientation) -> usize {
        assert!(self.contains_x(x), "column outside the chain");
        map_led(x, y, orientation)
    }
}

impl Default for ChainBounds {
    fn default() -> Self {
        Self::new(1)
    }
}
