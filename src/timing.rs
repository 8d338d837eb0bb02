// Frame timing - Software frame pacing
//
// FrameClock keeps the caller's loop on a fixed cadence by sleeping until the
// next frame boundary. Boundaries accumulate (`last_frame += interval`) so
// small sleep overshoots do not drift the cadence. When the loop falls
// behind, the missed time is dropped: the boundary resets to "now" and the
// following frames are paced normally, with no burst of short frames to
// catch up.
//
// Time is measured in whole milliseconds.

use crate::config::FrameRate;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

/// Time source used for pacing
pub trait Clock {
    /// Time elapsed since the clock's epoch
    fn now(&self) -> Duration;

    /// Block the calling thread for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Manually driven clock for deterministic tests
///
/// Sleeping advances the clock instantly. Clones share the same time, so a
/// test can keep a handle and `advance` it while a session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
    slept: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward without sleeping (simulates work)
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    /// Total time spent in `sleep`
    pub fn total_slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
        self.slept.set(self.slept.get() + duration);
    }
}

/// Outcome of one pacing step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameTiming {
    /// Time slept to reach the frame boundary
    pub slept: Duration,
    /// How far past the boundary the loop was (debt that was dropped)
    pub behind: Duration,
}

impl FrameTiming {
    /// Whether the loop missed the frame boundary
    pub fn was_late(&self) -> bool {
        self.slept.is_zero()
    }
}

/// Paces a loop to a fixed frame interval
#[derive(Debug)]
pub struct FrameClock<C: Clock> {
    clock: C,
    /// Frame interval in milliseconds
    interval: u64,
    /// Start of the current frame in clock milliseconds
    last_frame: u64,
}

impl<C: Clock> FrameClock<C> {
    /// Create a frame clock whose first frame starts now
    pub fn new(clock: C, rate: FrameRate) -> Self {
        let last_frame = clock.now().as_millis() as u64;
        Self {
            clock,
            interval: rate.interval_millis(),
            last_frame,
        }
    }

    /// Frame interval
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval)
    }

    /// Absolute clock time of the next frame boundary
    pub fn next_deadline(&self) -> Duration {
        Duration::from_millis(self.last_frame + self.interval)
    }

    /// The underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Sleep until the next frame boundary
    ///
    /// If the boundary has already passed, returns immediately and restarts
    /// the cadence from the current time.
    pub fn sync(&mut self) -> FrameTiming {
        let now = self.clock.now().as_millis() as u64;
        let deadline = self.last_frame + self.interval;

        if deadline > now {
            let wait = Duration::from_millis(deadline - now);
            self.clock.sleep(wait);
            self.last_frame = deadline;
            FrameTiming {
                slept: wait,
                behind: Duration::ZERO,
            }
        } else {
            self.last_frame = now;
            FrameTiming {
                slept: Duration::ZERO,
                behind: Duration::from_millis(now - deadline),
            }
        }
    }
}
