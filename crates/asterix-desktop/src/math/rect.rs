//! Window frames

use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Frame of a window on screen, top-left origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Free-form frame at `pos`
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Whole work area
    pub fn fill(area: Size) -> Self {
        Self::new(0.0, 0.0, area.width, area.height)
    }

    /// Left half of the work area
    pub fn left_half(area: Size) -> Self {
        Self::new(0.0, 0.0, area.width / 2.0, area.height)
    }

    /// Right half of the work area
    pub fn right_half(area: Size) -> Self {
        let half = area.width / 2.0;
        Self::new(half, 0.0, half, area.height)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
