#![no_std]

pub mod bounds;
pub mod canvas;
pub mod color;
pub mod glyph;
pub mod mapping;
pub mod math8;
pub mod scroll;
pub mod sink;
pub mod writer;

pub use bounds::{ChainBounds, MAX_LEDS};
pub use canvas::{Canvas, PixelRecord};
pub use glyph::{Glyph, glyph_for};
pub use mapping::{Orientation, map_led};
pub use scroll::{ScrollConfig, ScrollDirection, ScrollTick};
pub use sink::FrameSink;
pub use writer::{CursorMode, MatrixConfig, TextMatrix};

pub use color::{Rgb, palette};
pub use embassy_time::{Duration, Instant};

/// LED chain that is written one LED at a time
///
/// Implement this trait to put the text matrix on real hardware.
/// Indices are in wiring order, starting at the first LED of the chain.
pub trait DisplaySink {
    /// Set one LED of the next frame
    fn set(&mut self, index: usize, color: Rgb);

    /// Show the frame built so far
    fn present(&mut self);

    /// Release the hardware
    fn deinit(&mut self) {}
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameSink`] turns any driver into a [`DisplaySink`].
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
