//! Paddle Pong - classic two-paddle Pong on a fixed-rate loop
//!
//! Core modules:
//! - `sim`: Pure simulation (geometry, game state, one-tick update)
//! - `input`: Raw input events to paddle motion and quit requests
//! - `scheduler`: Fixed-rate frame loop (input -> simulate -> render -> sleep)
//! - `platform`: Clock/frontend seams plus the native winit implementation
//! - `renderer`: Software framebuffer drawing and scoreboard text
//! - `settings`: Presentation preferences loaded from disk

pub mod config;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use config::Config;
pub use error::InitError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display dimensions (pixels)
    pub const DISPLAY_WIDTH: u32 = 720;
    pub const DISPLAY_HEIGHT: u32 = 720;

    /// Target frame rate; one simulation tick per frame
    pub const TARGET_FPS: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: u32 = 12;
    pub const PADDLE_HEIGHT: u32 = DISPLAY_HEIGHT / 4;
    /// Gap between a paddle and its side of the display
    pub const PADDLE_MARGIN: f32 = 32.0;
    /// Player paddle step per key press (pixels)
    pub const PADDLE_SPEED: f32 = 18.0;
    /// Computer paddle step per tick (pixels)
    pub const OPPONENT_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_SIZE: u32 = 16;
    /// Ball speed per tick (pixels); serves travel at half this
    pub const BALL_SPEED: f32 = 16.0;

    /// Largest angle off horizontal a paddle can send the ball (75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 12.0;
}
