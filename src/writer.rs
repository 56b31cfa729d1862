use embassy_time::Instant;

#[cfg(feature = "log")]
use esp_println::println;

use crate::DisplaySink;
use crate::bounds::{ChainBounds, MAX_LEDS};
use crate::canvas::{Canvas, PixelRecord};
use crate::color::{Rgb, palette, scale_color};
use crate::glyph::{GLYPH_HEIGHT, glyph_for};
use crate::mapping::Orientation;
use crate::math8::PERCENT_MAX;
use crate::scroll::{ScrollConfig, ScrollState, ScrollTick, shift};

/// What happens to the cursor when it passes the visible width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// Keep counting until the next `restart` or `clear`
    #[default]
    Unbounded,
    /// Continue from the first column
    Wrap,
}

/// Configuration for a text matrix
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Number of chained tiles, 1 to 4
    pub tiles: u8,
    pub orientation: Orientation,
    /// Color of every unlit LED
    pub background: Rgb,
    /// Background intensity, 0 to 100
    pub background_intensity: u8,
    pub cursor_mode: CursorMode,
}

impl MatrixConfig {
    /// Set the orientation from its name
    ///
    /// # Panics
    /// If the name is not a known orientation.
    #[must_use]
    pub fn with_orientation_name(mut self, name: &str) -> Self {
        let Some(orientation) = Orientation::parse_from_str(name) else {
            panic!("unknown orientation name");
        };
        self.orientation = orientation;
        self
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            tiles: 1,
            orientation: Orientation::Serpentine,
            background: palette::BLACK_RGB,
            background_intensity: 0,
            cursor_mode: CursorMode::Unbounded,
        }
    }
}

/// Text writer for a chain of 8x8 LED tiles
///
/// Owns the cursor, the pixel log and the display sink. Every mutation ends
/// with a full redraw of the chain.
///
/// N is the capacity of the pixel log
pub struct TextMatrix<S: DisplaySink, const N: usize = MAX_LEDS> {
    // External dependencies and configuration
    sink: S,
    bounds: ChainBounds,
    orientation: Orientation,
    cursor_mode: CursorMode,

    // Internal state
    cursor: u16,
    background: Rgb,
    canvas: Canvas<N>,
    scroll: Option<ScrollState>,
}

impl<S: DisplaySink, const N: usize> TextMatrix<S, N> {
    /// Create a text matrix
    ///
    /// A non-black background is painted right away.
    ///
    /// # Panics
    /// If the tile count or the background intensity is out of range.
    pub fn new(sink: S, config: &MatrixConfig) -> Self {
        assert!(
            config.background_intensity <= PERCENT_MAX,
            "intensity must be within 0..=100"
        );
        let mut matrix = Self {
            sink,
            bounds: ChainBounds::new(config.tiles),
            orientation: config.orientation,
            cursor_mode: config.cursor_mode,
            cursor: 0,
            background: palette::BLACK_RGB,
            canvas: Canvas::new(),
            scroll: None,
        };
        if config.background != palette::BLACK_RGB {
            matrix.restart(0, config.background, config.background_intensity);
        }
        matrix
    }

    /// Write text at the cursor
    ///
    /// Characters without a glyph are skipped. Pixels right of the chain are
    /// clipped, but the cursor still advances by the full glyph width.
    ///
    /// # Panics
    /// If `intensity` is above 100.
    pub fn write(&mut self, text: &str, color: Rgb, intensity: u8) {
        let color = scale_color(color, intensity);
        for character in text.chars() {
            let glyph = glyph_for(character);
            self.log_points(glyph.points(), color);
            self.advance(glyph.advance());
        }
        self.redraw();
    }

    /// Light raw cursor-relative points without moving the cursor
    ///
    /// # Panics
    /// If `intensity` is above 100 or a point lies below the last row.
    pub fn write_raw(&mut self, points: &[(u8, u8)], color: Rgb, intensity: u8) {
        let color = scale_color(color, intensity);
        self.log_points(points, color);
        self.redraw();
    }

    /// Move the cursor, change the background and forget all text
    ///
    /// # Panics
    /// If `cursor` is not a visible column or `intensity` is above 100.
    pub fn restart(&mut self, cursor: u16, background: Rgb, intensity: u8) {
        assert!(self.bounds.contains_x(cursor), "cursor outside the chain");
        self.background = scale_color(background, intensity);
        self.cursor = cursor;
        self.canvas.clear();
        #[cfg(feature = "log")]
        println!(
            "[TextMatrix.restart] cursor {:?}, background {:?}",
            cursor, self.background
        );
        self.redraw();
    }

    /// Forget all text and return the cursor to the first column
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.canvas.clear();
        self.redraw();
    }

    /// Start scrolling the logged pixels
    pub fn start_scroll(&mut self, config: &ScrollConfig, now: Instant) {
        #[cfg(feature = "log")]
        println!(
            "[TextMatrix.start_scroll] {:?} every {:?} ms",
            config.direction.as_str(),
            config.period.as_millis()
        );
        self.scroll = Some(ScrollState::new(config, now));
    }

    pub fn stop_scroll(&mut self) {
        self.scroll = None;
    }

    pub const fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Advance the scroll animation
    ///
    /// Call this continuously. Returns `None` while scrolling is stopped.
    pub fn tick(&mut self, now: Instant) -> Option<ScrollTick> {
        let scroll = self.scroll.as_mut()?;
        let stepped = scroll.poll(now);
        let direction = scroll.direction();
        let report = scroll.report(stepped, now);

        if stepped {
            shift(&mut self.canvas, self.bounds, direction);
            self.redraw();
        }

        Some(report)
    }

    /// Paint every logged pixel over the background and present the frame
    pub fn redraw(&mut self) {
        self.canvas
            .redraw(&mut self.sink, self.bounds, self.orientation, self.background);
    }

    /// Blank the chain and release the sink
    pub fn deinit(mut self) -> S {
        self.canvas.clear();
        self.canvas.redraw(
            &mut self.sink,
            self.bounds,
            self.orientation,
            palette::BLACK_RGB,
        );
        self.sink.deinit();
        self.sink
    }

    /// Column where the next glyph starts
    pub const fn cursor(&self) -> u16 {
        self.cursor
    }

    pub const fn bounds(&self) -> ChainBounds {
        self.bounds
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Background color, already scaled
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// The pixel log
    pub const fn canvas(&self) -> &Canvas<N> {
        &self.canvas
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Log points relative to the cursor, clipping the ones past the chain
    fn log_points(&mut self, points: &[(u8, u8)], color: Rgb) {
        for &(dx, dy) in points {
            assert!(dy < GLYPH_HEIGHT, "row outside the tile");
            let x = self.cursor.saturating_add(u16::from(dx));
            if !self.bounds.contains_x(x) {
                continue;
            }
            if let Err(_rejected) = self.canvas.set(PixelRecord::new(x, dy, color)) {
                #[cfg(feature = "log")]
                println!(
                    "[TextMatrix.log_points] pixel log full, dropping ({:?}, {:?})",
                    _rejected.x, _rejected.y
                );
            }
        }
    }

    fn advance(&mut self, width: u8) {
        let width = u16::from(width);
        self.cursor = match self.cursor_mode {
            CursorMode::Unbounded => self.cursor.saturating_add(width),
            CursorMode::Wrap => (self.cursor + width) % self.bounds.visible_width(),
        };
    }
}
