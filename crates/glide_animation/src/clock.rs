//! Time sources for timelines.
//!
//! A timeline only ever asks "how much time has passed since your origin".
//! [`SystemClock`] answers with the monotonic wall clock; [`ManualClock`]
//! answers with whatever the host has advanced it to, which keeps frame
//! stepping deterministic.

use std::cell::Cell;
use std::fmt;
use std::time::{Duration, Instant};

/// A monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Monotonic wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
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
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Uses interior mutability so it can be shared (`Rc<ManualClock>`) between
/// the host loop that advances it and the timelines that read it.
#[derive(Default)]
pub struct ManualClock {
    position: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        self.position.set(self.position.get().saturating_add(delta));
    }

    /// Move the clock forward by whole milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Step forward by one frame at 60fps
    pub fn step_frame(&self) {
        self.advance(Duration::from_micros(16_667));
    }

    /// Jump to an absolute position. Positions behind the current one are ignored.
    pub fn set(&self, position: Duration) {
        if position > self.position.get() {
            self.position.set(position);
        }
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("position", &self.position.get())
            .finish()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.position.get()
    }
}
