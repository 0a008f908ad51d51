//! Software rendering into an RGBA framebuffer
//!
//! The frame is tiny (three rectangles and a line of text), so it is drawn on
//! the CPU and handed to `pixels` to upload and present.

pub mod text;

pub use text::ScoreFont;

use crate::sim::{GameState, Rect};

/// Colors for game elements (RGBA8)
pub mod colors {
    pub const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
    /// Paddles, ball and scoreboard share one color
    pub const OBJECT: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
}

/// Mutable view over an RGBA8 frame
pub struct Canvas<'a> {
    pixels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wrap a `width * height * 4` byte frame
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(frame);
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Fill a rectangle, clipped to the canvas. Positions truncate toward zero.
    pub fn fill_rect(&mut self, rect: &Rect, color: [u8; 4]) {
        let x0 = clip(rect.x, self.width);
        let y0 = clip(rect.y, self.height);
        let x1 = clip(rect.right(), self.width);
        let y1 = clip(rect.bottom(), self.height);

        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Blend `color` over the pixel at (x, y) by `coverage` in [0, 1]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 4], coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let coverage = coverage.clamp(0.0, 1.0);
        let dst = &mut self.pixels[idx];
        for c in 0..3 {
            let blended = f32::from(dst[c]) * (1.0 - coverage) + f32::from(color[c]) * coverage;
            dst[c] = blended.round() as u8;
        }
        dst[3] = 0xff;
    }
}

/// Clip a float coordinate to a pixel index in `[0, limit]`
#[inline]
fn clip(v: f32, limit: u32) -> u32 {
    (v.max(0.0) as u32).min(limit)
}

/// Draw the court: background, both paddles and the ball
pub fn draw_scene(canvas: &mut Canvas<'_>, state: &GameState) {
    canvas.clear(colors::BACKGROUND);
    canvas.fill_rect(&state.left_paddle, colors::OBJECT);
    canvas.fill_rect(&state.right_paddle, colors::OBJECT);
    canvas.fill_rect(&state.ball, colors::OBJECT);
}
