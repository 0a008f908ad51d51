//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed update per tick, no delta time
//! - No rendering, input polling or timing dependencies

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{
    Rect, clamp_to_bounds, intersects, normalized_impact, paddle_deflection, reflect_velocity,
};
pub use state::{GameState, Side};
pub use tick::{TickEvents, tick};
