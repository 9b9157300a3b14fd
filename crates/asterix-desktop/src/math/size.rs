//! Window and viewport dimensions

use asterix_hal::ScreenSize;
use serde::{Deserialize, Serialize};

/// Width and height in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The area left after reserving a strip of `height` at the bottom
    pub fn without_bottom(self, height: f32) -> Self {
        Self::new(self.width, (self.height - height).max(0.0))
    }
}

impl From<ScreenSize> for Size {
    fn from(screen: ScreenSize) -> Self {
        Self::new(screen.width, screen.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_screen() {
        let s: Size = ScreenSize::new(1280.0, 720.0).into();
        assert_eq!(s, Size::new(1280.0, 720.0));
    }

    #[test]
    fn test_without_bottom_clamps() {
        assert_eq!(
            Size::new(800.0, 600.0).without_bottom(48.0),
            Size::new(800.0, 552.0)
        );
        assert_eq!(Size::new(800.0, 20.0).without_bottom(48.0).height, 0.0);
    }
}
