use crate::color::Rgb;
use crate::{DisplaySink, OutputDriver};

/// Frame buffer in front of a whole-frame [`OutputDriver`]
///
/// `set` only touches the buffer; `present` hands the first `len` LEDs to the
/// driver in one write.
///
/// N is the buffer capacity in LEDs
pub struct FrameSink<D: OutputDriver, const N: usize> {
    driver: D,
    frame: [Rgb; N],
    len: usize,
}

impl<D: OutputDriver, const N: usize> FrameSink<D, N> {
    /// Create a sink that drives `len` LEDs
    ///
    /// # Panics
    /// If `len` exceeds the buffer capacity.
    pub fn new(driver: D, len: usize) -> Self {
        assert!(len <= N, "frame buffer too small for the chain");
        Self {
            driver,
            frame: [Rgb::default(); N],
            len,
        }
    }

    /// Current frame, in wiring order
    pub fn frame(&self) -> &[Rgb] {
        &self.frame[..self.len]
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give back the driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D: OutputDriver, const N: usize> DisplaySink for FrameSink<D, N> {
    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.frame[..self.len].get_mut(index) {
            *led = color;
        }
    }

    fn present(&mut self) {
        self.driver.write(&self.frame[..self.len]);
    }
}
