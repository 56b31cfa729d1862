//! Pixel log
//!
//! The canvas remembers every lit pixel so a whole frame can be rebuilt from
//! scratch whenever the text or the scroll position changes. It holds at most
//! one record per coordinate.

use heapless::Vec;

use crate::DisplaySink;
use crate::bounds::ChainBounds;
use crate::color::Rgb;
use crate::mapping::{Orientation, map_led};

/// One lit LED in logical coordinates
///
/// `color` is stored already scaled by its intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRecord {
    pub x: u16,
    pub y: u8,
    pub color: Rgb,
}

impl PixelRecord {
    pub const fn new(x: u16, y: u8, color: Rgb) -> Self {
        Self { x, y, color }
    }

    const fn is_at(&self, x: u16, y: u8) -> bool {
        self.x == x && self.y == y
    }
}

/// Ordered log of lit pixels
///
/// N is the maximum number of records
#[derive(Debug, Default)]
pub struct Canvas<const N: usize> {
    pixels: Vec<PixelRecord, N>,
}

impl<const N: usize> Canvas<N> {
    pub const fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Light a pixel, replacing the color of an existing record in place
    ///
    /// Returns the record if it is new and the log is full
    pub fn set(&mut self, record: PixelRecord) -> Result<(), PixelRecord> {
        if let Some(existing) = self
            .pixels
            .iter_mut()
            .find(|pixel| pixel.is_at(record.x, record.y))
        {
            existing.color = record.color;
            return Ok(());
        }
        self.pixels.push(record)
    }

    /// Get the record at a coordinate
    pub fn get(&self, x: u16, y: u8) -> Option<&PixelRecord> {
        self.pixels.iter().find(|pixel| pixel.is_at(x, y))
    }

    /// Forget every pixel
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelRecord> {
        self.pixels.iter()
    }

    /// Rightmost lit column, if anything is lit
    pub fn furthest_x(&self) -> Option<u16> {
        self.pixels.iter().map(|pixel| pixel.x).max()
    }

    /// Rewrite every record in place, dropping those the closure rejects
    ///
    /// Relative order of the surviving records is kept.
    pub fn retain_mut(&mut self, f: impl FnMut(&mut PixelRecord) -> bool) {
        self.pixels.retain_mut(f);
    }

    /// Paint the whole frame into the sink and present it
    ///
    /// Every LED first gets the background, then each record that lands on
    /// the chain is mapped and drawn over it.
    pub fn redraw<S: DisplaySink>(
        &self,
        sink: &mut S,
        bounds: ChainBounds,
        orientation: Orientation,
        background: Rgb,
    ) {
        let num_pixels = bounds.num_pixels();
        for index in 0..num_pixels {
            sink.set(index, background);
        }

        for pixel in &self.pixels {
            // Columns past the chain map past its last LED
            let index = map_led(pixel.x, pixel.y, orientation);
            if index >= num_pixels {
                continue;
            }
            sink.set(index, pixel.color);
        }

        sink.present();
    }
}
