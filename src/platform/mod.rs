//! Platform abstraction layer
//!
//! Handles the outside world the game loop depends on:
//! - Time (monotonic milliseconds, frame-pacing sleep)
//! - Input events
//! - Presenting a rendered frame
//!
//! The simulation never touches these directly; the scheduler drives them
//! through the [`Clock`] and [`Frontend`] traits so it can run headless in tests.

pub mod native;

use std::time::{Duration, Instant};

use crate::input::InputEvent;
use crate::sim::GameState;

pub use native::NativePlatform;

/// Monotonic time source and sleeper
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_millis(&self) -> u64;
    fn sleep_millis(&self, millis: u64);
}

/// Display plus input queue
pub trait Frontend {
    /// Drain every pending input event without blocking
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Draw the state and present it. Failures are logged, not returned.
    fn render(&mut self, state: &GameState);
}

/// Wall clock backed by [`Instant`]
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
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn sleep_millis(&self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }
}
