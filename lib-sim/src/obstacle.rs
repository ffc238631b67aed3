use glam::{vec2, Vec2};

use crate::{Aabb, Tuning, Viewport};

/// A ground-level obstacle. It only ever scrolls horizontally.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Top-left corner. `y` is fixed at spawn.
    pub pos: Vec2,
}

impl Obstacle {
    /// A fresh obstacle just past the right viewport edge.
    pub fn at_spawn(tuning: &Tuning, viewport: Viewport) -> Self {
        Self {
            pos: vec2(viewport.w, viewport.h - tuning.obstacle_size.y),
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.pos.x += speed;
    }

    /// True once the right edge has scrolled past the left viewport
    /// edge. Retiring these every tick is the only garbage collection
    /// the obstacle list gets.
    pub fn off_screen(&self, tuning: &Tuning) -> bool {
        self.pos.x + tuning.obstacle_size.x <= 0.0
    }

    pub fn aabb(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_pos_size(self.pos, tuning.obstacle_size)
    }
}
