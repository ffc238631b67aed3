use glam::Vec2;

/// Axis-aligned bounding box. Both the player and the obstacles
/// are plain rectangles, so this is the whole collision model.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Aabb {
            min: pos,
            max: pos + size,
        }
    }

    /// Inclusive interval test on both axes. Touching boxes overlap.
    pub fn overlaps(self, other: Self) -> bool {
        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
    }

    pub fn contains(self, point: Vec2) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    pub fn size(self) -> Vec2 {
        self.max - self.min
    }
}
