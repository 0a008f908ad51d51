//! One fixed simulation tick
//!
//! Advances the game by exactly one frame's worth of motion. There is no
//! delta time: the game is tick-based, one update per rendered frame.

use glam::Vec2;

use super::geometry::{clamp_to_bounds, intersects, paddle_deflection, reflect_velocity};
use super::state::{GameState, Side};

/// What happened during a tick, for logging and effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
    pub wall_bounce: bool,
    /// Side that won a point this tick
    pub scored: Option<Side>,
}

/// Advance the game state by one tick.
///
/// Order matters: paddle collisions resolve before scoring, and paddles are
/// clamped into the court last so input overshoot never reaches the renderer.
pub fn tick(state: &mut GameState) -> TickEvents {
    let config = state.config;
    let mut events = TickEvents::default();

    state.ticks += 1;

    // Ball vs right paddle: always leaves heading left
    if intersects(&state.ball, &state.right_paddle) {
        state.ball_velocity = paddle_deflection(
            &state.right_paddle,
            &state.ball,
            config.ball_speed,
            config.max_bounce_angle,
            -1.0,
        );
        events.right_paddle_hit = true;
    }

    // Ball vs left paddle: always leaves heading right
    if intersects(&state.ball, &state.left_paddle) {
        state.ball_velocity = paddle_deflection(
            &state.left_paddle,
            &state.ball,
            config.ball_speed,
            config.max_bounce_angle,
            1.0,
        );
        events.left_paddle_hit = true;
    }

    track_ball(state);

    // Ball left the court on either side
    if state.ball.x <= 0.0 {
        state.award_point(Side::Right);
        state.serve();
        events.scored = Some(Side::Right);
    }
    if state.ball.right() >= config.width() {
        state.award_point(Side::Left);
        state.serve();
        events.scored = Some(Side::Left);
    }

    // Ceiling and floor
    if state.ball.y <= 0.0 || state.ball.bottom() >= config.height() {
        state.ball_velocity = reflect_velocity(state.ball_velocity, Vec2::Y);
        events.wall_bounce = true;
    }

    state.ball.x += state.ball_velocity.x;
    state.ball.y += state.ball_velocity.y;

    state.scoreboard = state.format_scoreboard();

    let max_y = config.max_paddle_y();
    state.left_paddle = clamp_to_bounds(state.left_paddle, 0.0, max_y);
    state.right_paddle = clamp_to_bounds(state.right_paddle, 0.0, max_y);

    events
}

/// Computer paddle chases the ball's top edge one fixed step at a time.
///
/// The second comparison sees the already-moved paddle, so a ball within one
/// step below the paddle center leaves it where it was.
fn track_ball(state: &mut GameState) {
    let step = state.config.opponent_speed;
    if state.ball.y > state.right_paddle.center_y() {
        state.right_paddle.y += step;
    }
    if state.ball.y < state.right_paddle.center_y() {
        state.right_paddle.y -= step;
    }
}
