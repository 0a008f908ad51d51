//! Native desktop platform: winit window, pixels surface, rusttype font
//!
//! Everything is acquired in [`NativePlatform::new`] and released when the
//! value drops, whether the game quit normally or start-up failed half way.

use std::sync::Arc;
use std::time::Duration;

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use super::Frontend;
use crate::config::Config;
use crate::error::InitError;
use crate::input::{InputEvent, Key};
use crate::renderer::{Canvas, ScoreFont, colors, draw_scene};
use crate::settings::Settings;
use crate::sim::GameState;

/// Window, GPU surface and font for the desktop build.
///
/// Field order is drop order: the surface goes before the window it draws
/// into, and the window before its event loop.
pub struct NativePlatform {
    font: ScoreFont,
    pixels: Pixels<'static>,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
    width: u32,
    height: u32,
    font_size: f32,
}

impl NativePlatform {
    pub fn new(config: &Config, settings: &Settings) -> Result<Self, InitError> {
        let (width, height) = (config.display_width, config.display_height);

        let event_loop = EventLoop::new().map_err(InitError::EventLoop)?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(settings.title.clone())
                .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)))
                .with_resizable(false)
                .build(&event_loop)
                .map_err(InitError::Window)?,
        );

        let physical = window.inner_size();
        let surface = SurfaceTexture::new(physical.width, physical.height, Arc::clone(&window));
        let pixels = PixelsBuilder::new(width, height, surface)
            .enable_vsync(settings.vsync)
            .build()
            .map_err(InitError::Surface)?;

        let font =
            ScoreFont::from_path_or_embedded(settings.font_path.as_deref(), settings.font_size)?;

        log::info!(
            "Display ready: {}x{} ({}x{} physical, vsync {})",
            width,
            height,
            physical.width,
            physical.height,
            settings.vsync
        );

        Ok(Self {
            font,
            pixels,
            window,
            event_loop,
            width,
            height,
            font_size: settings.font_size,
        })
    }
}

impl Frontend for NativePlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pixels = &mut self.pixels;

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _| {
                let Event::WindowEvent { event, .. } = event else {
                    return;
                };
                match event {
                    WindowEvent::CloseRequested => events.push(InputEvent::Quit),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key,
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => events.push(InputEvent::KeyDown(map_key(physical_key))),
                    WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                        if let Err(e) = pixels.resize_surface(size.width, size.height) {
                            log::warn!("Surface resize failed: {:?}", e);
                        }
                    }
                    _ => {}
                }
            });

        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {}", code);
            events.push(InputEvent::Quit);
        }

        events
    }

    fn render(&mut self, state: &GameState) {
        {
            let mut canvas = Canvas::new(self.pixels.frame_mut(), self.width, self.height);
            draw_scene(&mut canvas, state);
            self.font.draw_centered(
                &mut canvas,
                &state.scoreboard,
                self.width as f32 / 2.0,
                self.font_size * 2.0,
                colors::OBJECT,
            );
        }

        if let Err(e) = self.pixels.render() {
            log::warn!("Render error: {:?}", e);
        }
    }
}

impl Drop for NativePlatform {
    fn drop(&mut self) {
        log::info!("Releasing display (window {:?})", self.window.id());
    }
}

/// Keyboard layout: W/S or the arrow keys move, Escape quits
fn map_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::KeyW | KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::KeyS | KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::Up);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowUp)), Key::Up);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyS)), Key::Down);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowDown)), Key::Down);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Other);
    }
}
