use glam::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{Viewport, BASE_VIEW_HEIGHT, BASE_VIEW_WIDTH};

/// Every gameplay constant in one serde-friendly table, expressed in
/// the units of the 800x400 design viewport. Positions and speeds are
/// per-tick quantities, `Y` pointing down (so the jump velocity is
/// negative and gravity positive).
///
/// The driver may override the defaults from a RON file before scaling
/// the table onto the real viewport with [Tuning::scaled_to].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_size: Vec2,
    /// Resting x of the player's left edge.
    pub player_x: f32,
    pub jump_velocity: f32,
    /// Per-tick velocity increment while airborne.
    pub gravity: f32,
    pub obstacle_size: Vec2,
    /// Initial scroll speed. Negative: obstacles march left.
    pub scroll_speed: f32,
    /// Speed change per up/down keypress.
    pub scroll_speed_step: f32,
    /// Fastest allowed scroll (most negative).
    pub scroll_speed_min: f32,
    /// Slowest allowed scroll. Keeping this below zero means the
    /// obstacles can never stall or reverse.
    pub scroll_speed_max: f32,
    /// Blink strength a reading must rise above to count as a jump,
    /// on the headset's 0-100 scale.
    pub blink_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: vec2(50.0, 50.0),
            player_x: 50.0,
            jump_velocity: -20.0,
            gravity: 1.0,
            obstacle_size: vec2(50.0, 50.0),
            scroll_speed: -5.0,
            scroll_speed_step: 1.0,
            scroll_speed_min: -20.0,
            scroll_speed_max: -1.0,
            blink_threshold: 55.0,
        }
    }
}

impl Tuning {
    /// Map the design-space table onto the real viewport. Horizontal
    /// quantities scale by width, vertical ones by height. The blink
    /// threshold is a device unit and never scales.
    pub fn scaled_to(self, viewport: Viewport) -> Tuning {
        let sx = viewport.w / BASE_VIEW_WIDTH;
        let sy = viewport.h / BASE_VIEW_HEIGHT;

        Tuning {
            player_size: self.player_size * vec2(sx, sy),
            player_x: self.player_x * sx,
            jump_velocity: self.jump_velocity * sy,
            gravity: self.gravity * sy,
            obstacle_size: self.obstacle_size * vec2(sx, sy),
            scroll_speed: self.scroll_speed * sx,
            scroll_speed_step: self.scroll_speed_step * sx,
            scroll_speed_min: self.scroll_speed_min * sx,
            scroll_speed_max: self.scroll_speed_max * sx,
            blink_threshold: self.blink_threshold,
        }
    }
}
