//! Scoreboard text rasterized with rusttype

use std::path::{Path, PathBuf};

use rusttype::{Font, Scale, point};

use super::Canvas;
use crate::error::InitError;

/// Name reported for the built-in font in errors and logs
const EMBEDDED_FONT_NAME: &str = "assets/DejaVuSansMono.ttf";

/// DejaVu Sans Mono, compiled into the binary so the game starts without
/// any files next to it
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// A loaded TrueType font at a fixed pixel size
pub struct ScoreFont {
    font: Font<'static>,
    scale: Scale,
}

impl ScoreFont {
    /// The configured font file if there is one, else the built-in font
    pub fn from_path_or_embedded(path: Option<&Path>, pixel_size: f32) -> Result<Self, InitError> {
        match path {
            Some(path) => Self::load(path, pixel_size),
            None => Self::embedded(pixel_size),
        }
    }

    /// The font bundled with the game
    pub fn embedded(pixel_size: f32) -> Result<Self, InitError> {
        let font = Font::try_from_bytes(EMBEDDED_FONT)
            .ok_or_else(|| InitError::FontParse(PathBuf::from(EMBEDDED_FONT_NAME)))?;
        log::info!("Using built-in font at {}px", pixel_size);
        Ok(Self {
            font,
            scale: Scale::uniform(pixel_size),
        })
    }

    /// Load a font file from disk
    pub fn load(path: &Path, pixel_size: f32) -> Result<Self, InitError> {
        let bytes = std::fs::read(path).map_err(|source| InitError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font =
            Font::try_from_vec(bytes).ok_or_else(|| InitError::FontParse(path.to_path_buf()))?;
        log::info!("Loaded font {} at {}px", path.display(), pixel_size);
        Ok(Self {
            font,
            scale: Scale::uniform(pixel_size),
        })
    }

    /// Horizontal advance of `text` in pixels
    pub fn text_width(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map_or(0.0, |g| {
                g.position().x + g.unpositioned().h_metrics().advance_width
            })
    }

    /// Draw `text` horizontally centered on `center_x` with its baseline at `baseline_y`
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas<'_>,
        text: &str,
        center_x: f32,
        baseline_y: f32,
        color: [u8; 4],
    ) {
        let start_x = center_x - self.text_width(text) / 2.0;
        for glyph in self.font.layout(text, self.scale, point(start_x, baseline_y)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    canvas.blend_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
                });
            }
        }
    }
}
