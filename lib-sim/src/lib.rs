//! The deterministic simulation core of the blink runner.
//! Everything in here is headless: it advances in fixed logical
//! ticks and never touches the window, the clock or the headset.
//! The coordinate system follows the screen:
//! * `X` points right
//! * `Y` points down, with the ground line near the bottom edge

mod aabb;
mod obstacle;
mod player;
mod state;
mod tuning;

pub use aabb::*;
pub use obstacle::*;
pub use player::*;
pub use state::*;
pub use tuning::*;

/// Fixed logical timestep. The driver may render faster, but the
/// simulation only ever advances in steps of this size.
pub const TICKRATE: f32 = 1.0 / 30.0;

/// The design-time viewport the tuning table is written against.
/// [Tuning::scaled_to] maps the table onto the real viewport.
pub const BASE_VIEW_WIDTH: f32 = 800.0;
pub const BASE_VIEW_HEIGHT: f32 = 400.0;

/// Viewport dimensions, discovered once at startup and immutable
/// for the whole session.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
}

impl Viewport {
    pub fn new(w: f32, h: f32) -> anyhow::Result<Self> {
        anyhow::ensure!(
            w > 0.0 && h > 0.0,
            "viewport dimensions must be positive, got {w}x{h}"
        );
        Ok(Self { w, h })
    }

    /// The horizontal midpoint. Obstacle spawning keys off it.
    pub fn mid_x(&self) -> f32 {
        self.w / 2.0
    }
}
