//! Immutable gameplay configuration
//!
//! Groups the compile-time constants from [`crate::consts`] into one value the
//! simulation carries around. It is not loaded from disk: physics is fixed.

use crate::consts::*;

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub display_width: u32,
    pub display_height: u32,
    pub paddle_width: u32,
    pub paddle_height: u32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub opponent_speed: f32,
    pub ball_size: u32,
    pub ball_speed: f32,
    pub max_bounce_angle: f32,
    pub target_fps: u32,
}

impl Config {
    /// The one configuration the game ships with
    pub const STANDARD: Config = Config {
        display_width: DISPLAY_WIDTH,
        display_height: DISPLAY_HEIGHT,
        paddle_width: PADDLE_WIDTH,
        paddle_height: PADDLE_HEIGHT,
        paddle_margin: PADDLE_MARGIN,
        paddle_speed: PADDLE_SPEED,
        opponent_speed: OPPONENT_SPEED,
        ball_size: BALL_SIZE,
        ball_speed: BALL_SPEED,
        max_bounce_angle: MAX_BOUNCE_ANGLE,
        target_fps: TARGET_FPS,
    };

    pub fn width(&self) -> f32 {
        self.display_width as f32
    }

    pub fn height(&self) -> f32 {
        self.display_height as f32
    }

    /// X position of a paddle's left edge
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    pub fn right_paddle_x(&self) -> f32 {
        self.width() - self.paddle_width as f32 - self.paddle_margin
    }

    /// Paddle Y that vertically centers it on the display
    pub fn centered_paddle_y(&self) -> f32 {
        (self.display_height / 2 - self.paddle_height / 2) as f32
    }

    /// Largest legal paddle Y (paddle bottom on the display floor)
    pub fn max_paddle_y(&self) -> f32 {
        (self.display_height - self.paddle_height) as f32
    }

    /// Frame budget in whole milliseconds (1000 / fps, truncated)
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_positions() {
        let config = Config::default();
        assert_eq!(config.left_paddle_x(), 32.0);
        assert_eq!(config.right_paddle_x(), 676.0);
    }

    #[test]
    fn test_paddle_height_is_quarter_display() {
        let config = Config::default();
        assert_eq!(config.paddle_height, 180);
        assert_eq!(config.centered_paddle_y(), 270.0);
        assert_eq!(config.max_paddle_y(), 540.0);
    }

    #[test]
    fn test_frame_millis_truncates() {
        assert_eq!(Config::STANDARD.frame_millis(), 16);
    }
}
