//! Axis-aligned rectangles and the bounce model
//!
//! Paddles and the ball are all rectangles. Collision is plain AABB overlap;
//! the interesting part is how a paddle decides the ball's new direction.

use glam::Vec2;

/// An axis-aligned rectangle with a fixed size and a movable position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge (screen coordinates, y grows downward)
    pub y: f32,
    w: u32,
    h: u32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: u32, h: u32) -> Self {
        debug_assert!(w > 0 && h > 0, "rect size must be positive");
        Self { x, y, w, h }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.h as f32
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height()
    }

    /// Half height in whole pixels (integer division, as the size is integral)
    #[inline]
    pub fn half_height(&self) -> f32 {
        (self.h / 2) as f32
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.half_height()
    }
}

/// True iff the two rectangles overlap with positive area.
///
/// Rectangles that only share an edge do not intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Force `rect.y` into `[min_y, max_y]`
pub fn clamp_to_bounds(rect: Rect, min_y: f32, max_y: f32) -> Rect {
    Rect {
        y: rect.y.max(min_y).min(max_y),
        ..rect
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Offset of the ball's center from the paddle's center, scaled to [-1, 1].
///
/// Positive when the ball is above the paddle center. Overlaps at the very
/// tips of the paddle would exceed unit magnitude, so the value is clamped.
pub fn normalized_impact(paddle: &Rect, ball: &Rect) -> f32 {
    let rel = paddle.center_y() - ball.center_y();
    (rel / paddle.half_height()).clamp(-1.0, 1.0)
}

/// Velocity the ball leaves a paddle with.
///
/// `direction` is the horizontal sign of travel after the hit (+1 right, -1 left).
/// A hit above the paddle center sends the ball upward, below sends it down,
/// and the angle off horizontal grows linearly up to `max_angle` at the tips.
pub fn paddle_deflection(
    paddle: &Rect,
    ball: &Rect,
    speed: f32,
    max_angle: f32,
    direction: f32,
) -> Vec2 {
    let angle = normalized_impact(paddle, ball) * max_angle;
    Vec2::new(direction.signum() * speed * angle.cos(), -speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_SPEED, MAX_BOUNCE_ANGLE};

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10, 10);
        let b = Rect::new(5.0, 5.0, 10, 10);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_intersects_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10, 10);
        // Shares the right edge
        let b = Rect::new(10.0, 0.0, 10, 10);
        assert!(!intersects(&a, &b));
        // Shares the bottom edge
        let c = Rect::new(0.0, 10.0, 10, 10);
        assert!(!intersects(&a, &c));
    }

    #[test]
    fn test_intersects_contained() {
        let outer = Rect::new(0.0, 0.0, 100, 100);
        let inner = Rect::new(40.0, 40.0, 4, 4);
        assert!(intersects(&outer, &inner));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::new(0.0, 0.0, 10, 10);
        let b = Rect::new(50.0, 0.0, 10, 10);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let r = Rect::new(3.0, -20.0, 12, 180);
        assert_eq!(clamp_to_bounds(r, 0.0, 540.0).y, 0.0);

        let r = Rect::new(3.0, 900.0, 12, 180);
        assert_eq!(clamp_to_bounds(r, 0.0, 540.0).y, 540.0);

        // In range: untouched, x and size preserved
        let r = Rect::new(3.0, 100.0, 12, 180);
        assert_eq!(clamp_to_bounds(r, 0.0, 540.0), r);
    }

    #[test]
    fn test_reflect_velocity_off_floor() {
        let v = Vec2::new(16.0, 5.0);
        let reflected = reflect_velocity(v, Vec2::Y);
        assert!((reflected.x - 16.0).abs() < 0.001);
        assert!((reflected.y + 5.0).abs() < 0.001);
    }

    #[test]
    fn test_center_hit_goes_straight() {
        let paddle = Rect::new(676.0, 270.0, 12, 180);
        // Ball center at 360 == paddle center
        let ball = Rect::new(665.0, 352.0, 16, 16);
        let v = paddle_deflection(&paddle, &ball, BALL_SPEED, MAX_BOUNCE_ANGLE, -1.0);
        assert!((v.x + BALL_SPEED).abs() < 0.001);
        assert!(v.y.abs() < 0.001);
    }

    #[test]
    fn test_high_hit_deflects_upward() {
        let paddle = Rect::new(32.0, 270.0, 12, 180);
        let ball = Rect::new(40.0, 280.0, 16, 16);
        let v = paddle_deflection(&paddle, &ball, BALL_SPEED, MAX_BOUNCE_ANGLE, 1.0);
        assert!(v.x > 0.0);
        assert!(v.y < 0.0, "hit above center should send the ball up");
    }

    #[test]
    fn test_low_hit_deflects_downward() {
        let paddle = Rect::new(32.0, 270.0, 12, 180);
        let ball = Rect::new(40.0, 430.0, 16, 16);
        let v = paddle_deflection(&paddle, &ball, BALL_SPEED, MAX_BOUNCE_ANGLE, 1.0);
        assert!(v.y > 0.0, "hit below center should send the ball down");
    }

    #[test]
    fn test_off_paddle_impact_is_clamped() {
        // Paddle spans 270..450 (center 360); ball center at 200
        // rel = 160, raw norm = 160 / 90 ~= 1.78
        let paddle = Rect::new(676.0, 270.0, 12, 180);
        let ball = Rect::new(665.0, 192.0, 16, 16);
        assert_eq!(normalized_impact(&paddle, &ball), 1.0);

        let v = paddle_deflection(&paddle, &ball, BALL_SPEED, MAX_BOUNCE_ANGLE, -1.0);
        let angle = (-v.y).atan2(-v.x);
        assert!((angle - MAX_BOUNCE_ANGLE).abs() < 1e-4);
        assert!((v.length() - BALL_SPEED).abs() < 1e-3);
    }
}
