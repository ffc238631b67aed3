use glam::{vec2, Vec2};

use crate::{Aabb, Tuning, Viewport};

/// The player rectangle. Only `y` ever moves; the blink signal is the
/// sole control input.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left corner.
    pub pos: Vec2,
    /// Vertical velocity, positive pointing down.
    pub velocity: f32,
    pub is_jumping: bool,
    /// The previous tick's blink reading. A jump only fires on the
    /// tick where the signal crosses the threshold from below, which
    /// debounces a held or noisy super-threshold signal.
    last_reading: f32,
}

impl Player {
    pub fn new(tuning: &Tuning, viewport: Viewport) -> Self {
        Self {
            pos: vec2(tuning.player_x, ground_line(tuning, viewport)),
            velocity: 0.0,
            is_jumping: false,
            last_reading: 0.0,
        }
    }

    /// Advance the player by one tick.
    pub fn update(&mut self, blink: f32, tuning: &Tuning, viewport: Viewport) {
        if self.is_jumping {
            self.velocity += tuning.gravity;
        }

        let rising =
            blink > tuning.blink_threshold && self.last_reading <= tuning.blink_threshold;
        if rising && !self.is_jumping {
            self.velocity = tuning.jump_velocity;
            self.is_jumping = true;
        }
        self.last_reading = blink;

        self.pos.y += self.velocity;

        let ground = ground_line(tuning, viewport);
        if self.pos.y >= ground {
            self.pos.y = ground;
            self.velocity = 0.0;
            self.is_jumping = false;
        }
    }

    pub fn aabb(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_pos_size(self.pos, tuning.player_size)
    }
}

/// Top-left `y` at which the player rests on the floor.
pub fn ground_line(tuning: &Tuning, viewport: Viewport) -> f32 {
    viewport.h - tuning.player_size.y
}
