//! Horizontal scrolling
//!
//! Provides a polled rate limiter and the per-step pixel shift. Nothing here
//! sleeps: the caller keeps calling `tick` and may use the returned
//! [`ScrollTick`] to decide how long to wait.
//!
//! Content wraps around its own drawn width, which is the larger of the
//! rightmost lit column plus one and the visible width. After a step every
//! pixel at `x >= visible_width` is dropped, so a pixel landing exactly on the
//! visible width is already off-screen.

use embassy_time::{Duration, Instant};

use crate::bounds::ChainBounds;
use crate::canvas::Canvas;

const DIRECTION_NAME_LEFT: &str = "left";
const DIRECTION_NAME_RIGHT: &str = "right";

/// Default time between two scroll steps.
pub const DEFAULT_SCROLL_PERIOD: Duration = Duration::from_millis(150);

/// Which way content moves on every step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

impl ScrollDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => DIRECTION_NAME_LEFT,
            Self::Right => DIRECTION_NAME_RIGHT,
        }
    }

    /// Parse a direction name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case(DIRECTION_NAME_LEFT) {
            Some(Self::Left)
        } else if s.eq_ignore_ascii_case(DIRECTION_NAME_RIGHT) {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Move a column one step inside `0..width`
    ///
    /// `width` is at most `u16::MAX + 1`, so the result always fits a column.
    #[allow(clippy::cast_possible_truncation)]
    const fn step(self, x: u16, width: u32) -> u16 {
        let x = x as u32;
        let stepped = match self {
            Self::Left => (x + width - 1) % width,
            Self::Right => (x + 1) % width,
        };
        stepped as u16
    }
}

/// Configuration for scrolling
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    pub direction: ScrollDirection,
    /// Minimum time between two steps
    pub period: Duration,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Left,
            period: DEFAULT_SCROLL_PERIOD,
        }
    }
}

/// Result of a scroll tick.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTick {
    /// Whether the content moved during this tick.
    pub stepped: bool,
    /// Earliest time the next step may happen.
    pub next_deadline: Instant,
    /// How long to wait until the next step (zero if already due).
    pub sleep_duration: Duration,
}

/// Rate limiter for scroll steps
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    direction: ScrollDirection,
    period: Duration,
    last_tick: Instant,
}

impl ScrollState {
    /// Start scrolling; the first step is due one period after `now`
    pub const fn new(config: &ScrollConfig, now: Instant) -> Self {
        Self {
            direction: config.direction,
            period: config.period,
            last_tick: now,
        }
    }

    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time of the last step (or of the start)
    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Earliest time the next step may happen
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + self.period
    }

    /// Returns whether a step is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    /// Consume a step if one is due, recording `now` as the step time
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.last_tick = now;
        true
    }

    /// Timing report for the caller after a tick at `now`
    pub fn report(&self, stepped: bool, now: Instant) -> ScrollTick {
        let next_deadline = self.next_deadline();
        let sleep_duration = if next_deadline > now {
            Duration::from_ticks(next_deadline.as_ticks() - now.as_ticks())
        } else {
            Duration::from_ticks(0)
        };

        ScrollTick {
            stepped,
            next_deadline,
            sleep_duration,
        }
    }
}

/// Width that scrolling wraps around for the current content
///
/// Counted in `u32` since content may reach the last representable column.
pub fn wrap_width<const N: usize>(canvas: &Canvas<N>, bounds: ChainBounds) -> u32 {
    let visible_width = u32::from(bounds.visible_width());
    canvas
        .furthest_x()
        .map_or(visible_width, |x| visible_width.max(u32::from(x) + 1))
}

/// Move every logged pixel one column and drop those that leave the display
pub fn shift<const N: usize>(
    canvas: &mut Canvas<N>,
    bounds: ChainBounds,
    direction: ScrollDirection,
) {
    let width = wrap_width(canvas, bounds);
    canvas.retain_mut(|pixel| {
        pixel.x = direction.step(pixel.x, width);
        bounds.contains_x(pixel.x)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_at_both_ends() {
        assert_eq!(ScrollDirection::Left.step(0, 8), 7);
        assert_eq!(ScrollDirection::Left.step(5, 8), 4);
        assert_eq!(ScrollDirection::Right.step(7, 8), 0);
        assert_eq!(ScrollDirection::Right.step(5, 8), 6);
        assert_eq!(ScrollDirection::Right.step(u16::MAX, 1 << 16), 0);
        assert_eq!(ScrollDirection::Left.step(0, 1 << 16), u16::MAX);
    }
}
