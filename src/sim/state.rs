//! Game state and serve logic
//!
//! Everything the simulation mutates lives in one owned [`GameState`].

use glam::Vec2;

use super::geometry::Rect;
use crate::config::Config;

/// One side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Player paddle
    Left,
    /// Computer paddle
    Right,
}

impl Side {
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Geometry and speeds this state was built with
    pub config: Config,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    /// Ball displacement per tick
    pub ball_velocity: Vec2,
    pub left_score: u32,
    pub right_score: u32,
    /// Paddle the next serve starts in front of
    pub serving_side: Side,
    /// Scoreboard text, refreshed every tick
    pub scoreboard: String,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameState {
    /// Create a fresh game and serve the first ball
    pub fn new(config: Config) -> Self {
        let paddle_y = config.centered_paddle_y();
        let mut state = Self {
            config,
            left_paddle: Rect::new(
                config.left_paddle_x(),
                paddle_y,
                config.paddle_width,
                config.paddle_height,
            ),
            right_paddle: Rect::new(
                config.right_paddle_x(),
                paddle_y,
                config.paddle_width,
                config.paddle_height,
            ),
            ball: Rect::new(0.0, 0.0, config.ball_size, config.ball_size),
            ball_velocity: Vec2::ZERO,
            left_score: 0,
            right_score: 0,
            serving_side: Side::Right,
            scoreboard: String::new(),
            ticks: 0,
        };

        state.serve();
        state.scoreboard = state.format_scoreboard();
        state
    }

    /// Reset paddles and ball for the next point.
    ///
    /// The ball starts four paddle-widths in front of the serving paddle,
    /// vertically centered, and travels straight across at half speed toward
    /// the other paddle. The serving side alternates every call.
    pub fn serve(&mut self) {
        let config = self.config;
        let paddle_y = config.centered_paddle_y();
        self.left_paddle.y = paddle_y;
        self.right_paddle.y = paddle_y;

        let serve_speed = config.ball_speed / 2.0;
        match self.serving_side {
            Side::Left => {
                self.ball.x = self.left_paddle.x + self.left_paddle.width() * 4.0;
                self.ball_velocity.x = serve_speed;
            }
            Side::Right => {
                self.ball.x = self.right_paddle.x - self.right_paddle.width() * 4.0;
                self.ball_velocity.x = -serve_speed;
            }
        }
        self.ball_velocity.y = 0.0;
        self.ball.y = (config.display_height / 2 - config.ball_size / 2) as f32;

        self.serving_side = self.serving_side.flip();
    }

    /// Award a point to `side`
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
    }

    pub fn format_scoreboard(&self) -> String {
        format!("{} | {}", self.left_score, self.right_score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
