//! 2D point/offset type

use serde::{Deserialize, Serialize};

/// A point or offset in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise clamp where the lower bound wins over an inverted range
    ///
    /// `f32::clamp` panics when `min > max`; a widget larger than the viewport
    /// produces exactly that range, so the max is raised to the min first.
    #[inline]
    pub fn clamp_floor(self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(
            self.x.max(min.x).min(max.x.max(min.x)),
            self.y.max(min.y).min(max.y.max(min.y)),
        )
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}
