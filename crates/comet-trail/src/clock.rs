//! Frame scheduling for the cooperative animation loop.

use std::time::{Duration, Instant};

/// Fixed-rate frame scheduler.
///
/// The host polls for input with [`FrameClock::timeout`] as the poll
/// deadline and steps the simulation whenever [`FrameClock::tick`] reports
/// a frame boundary. Dropping the clock together with the event loop is
/// the only teardown; nothing stays registered.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Create a clock targeting the given frame interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// Remaining time until the next frame boundary.
    pub fn timeout(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// True at most once per interval; the caller advances the simulation
    /// when it fires.
    pub fn tick(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.interval {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}
