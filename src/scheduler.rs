//! Fixed-rate frame scheduler
//!
//! One frame = drain input, one simulation tick, render, sleep out the rest
//! of the frame budget. There is no catch-up: a slow frame simply makes the
//! game run slower, it never skips simulation.

use crate::input::{InputCommand, InputMapper};
use crate::platform::{Clock, Frontend};
use crate::sim::{GameState, Side, TickEvents, tick};

/// Number of frames the FPS estimate averages over
const FPS_WINDOW: usize = 60;

/// Scheduler lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Rolling frame timing
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_starts: [u64; FPS_WINDOW],
    frame_index: usize,
    frames: u64,
    overruns: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_starts: [0; FPS_WINDOW],
            frame_index: 0,
            frames: 0,
            overruns: 0,
        }
    }

    /// Record the start time of a frame
    pub fn record_start(&mut self, now_millis: u64) {
        self.frame_starts[self.frame_index] = now_millis;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames += 1;
    }

    pub fn record_overrun(&mut self) {
        self.overruns += 1;
    }

    /// Frames per second over the last window, once a full window exists
    pub fn fps(&self) -> Option<u32> {
        if self.frames < FPS_WINDOW as u64 {
            return None;
        }
        // frame_index now points at the oldest entry
        let oldest = self.frame_starts[self.frame_index];
        let newest = self.frame_starts[(self.frame_index + FPS_WINDOW - 1) % FPS_WINDOW];
        let elapsed = newest.saturating_sub(oldest);
        if elapsed == 0 {
            return None;
        }
        let intervals = (FPS_WINDOW - 1) as f64;
        Some((intervals * 1000.0 / elapsed as f64).round() as u32)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the game state and drives it one frame at a time
pub struct FrameScheduler {
    state: GameState,
    mapper: InputMapper,
    frame_budget_millis: u64,
    loop_state: LoopState,
    stats: FrameStats,
}

impl FrameScheduler {
    pub fn new(state: GameState) -> Self {
        let config = state.config;
        Self {
            mapper: InputMapper::new(config.paddle_speed),
            frame_budget_millis: config.frame_millis(),
            state,
            loop_state: LoopState::Running,
            stats: FrameStats::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run frames until the player quits
    pub fn run<F: Frontend, C: Clock>(&mut self, frontend: &mut F, clock: &C) {
        log::info!(
            "Game loop running ({} ms frame budget)",
            self.frame_budget_millis
        );
        while self.run_frame(frontend, clock) == LoopState::Running {}
        log::info!(
            "Game loop stopped after {} frames ({} overran), final score {}",
            self.stats.frames(),
            self.stats.overruns(),
            self.state.scoreboard
        );
    }

    /// Run a single frame and report whether the loop should continue.
    ///
    /// A quit request abandons the frame immediately: no tick, no render,
    /// no sleep.
    pub fn run_frame<F: Frontend, C: Clock>(&mut self, frontend: &mut F, clock: &C) -> LoopState {
        if self.loop_state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        let frame_start = clock.now_millis();
        self.stats.record_start(frame_start);

        let events = frontend.poll_events();
        if self.mapper.apply(events, &mut self.state) == InputCommand::Quit {
            log::info!("Quit requested");
            self.loop_state = LoopState::Stopped;
            return self.loop_state;
        }

        let events = tick(&mut self.state);
        self.log_events(&events);

        frontend.render(&self.state);

        let frame_time = clock.now_millis().saturating_sub(frame_start);
        if frame_time < self.frame_budget_millis {
            clock.sleep_millis(self.frame_budget_millis - frame_time);
        } else {
            self.stats.record_overrun();
            log::debug!(
                "Frame {} overran: {} ms (budget {} ms)",
                self.stats.frames(),
                frame_time,
                self.frame_budget_millis
            );
        }

        if self.stats.frames() % FPS_WINDOW as u64 == 0 {
            if let Some(fps) = self.stats.fps() {
                log::debug!("FPS: {}", fps);
            }
        }

        self.loop_state
    }

    fn log_events(&self, events: &TickEvents) {
        if events.left_paddle_hit {
            log::debug!("Ball hit left paddle, velocity {:?}", self.state.ball_velocity);
        }
        if events.right_paddle_hit {
            log::debug!("Ball hit right paddle, velocity {:?}", self.state.ball_velocity);
        }
        if let Some(side) = events.scored {
            let who = match side {
                Side::Left => "Player",
                Side::Right => "Computer",
            };
            log::info!("{} scores: {}", who, self.state.scoreboard);
        }
    }
}
