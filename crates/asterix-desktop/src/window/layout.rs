//! Placement policy
//!
//! Pure functions of their inputs. The viewport is always passed in, never
//! read from the host.

use asterix_vfs::AppKind;

use super::{SnapState, Window};
use crate::math::{Rect, Size, Vec2};

/// Height reserved for the taskbar at the bottom of the screen
pub const TASKBAR_HEIGHT: f32 = 48.0;

/// Position for a window opened without one.
///
/// Cascades from just above-left of the viewport center by `step` pixels per
/// visible window. Without a viewport the window lands at (120, 80).
pub fn default_position(viewport: Option<Size>, open_count: usize, step: f32) -> Vec2 {
    let offset = open_count as f32 * step;
    match viewport {
        Some(vp) => Vec2::new(
            (vp.width / 2.0 - 250.0 + offset).max(20.0),
            (vp.height / 2.0 - 200.0 + offset).max(50.0),
        ),
        None => Vec2::new(120.0, 80.0),
    }
}

/// Size a window of this kind gets when none was set
pub fn default_size(kind: AppKind) -> Size {
    match kind {
        AppKind::Terminal => Size::new(800.0, 550.0),
        AppKind::FileExplorer => Size::new(780.0, 560.0),
        AppKind::Settings => Size::new(650.0, 500.0),
        AppKind::Properties => Size::new(500.0, 400.0),
        AppKind::ProjectViewer | AppKind::Preview => Size::new(900.0, 600.0),
        AppKind::DocumentViewer => Size::new(750.0, 600.0),
        AppKind::Notepad => Size::new(660.0, 520.0),
        AppKind::ImageViewer => Size::new(700.0, 560.0),
        _ => Size::new(350.0, 250.0),
    }
}

/// Pixel rectangle a renderer should draw the window at
pub fn snap_frame(window: &Window, viewport: Size) -> Rect {
    let area = viewport.without_bottom(TASKBAR_HEIGHT);
    match window.snap {
        SnapState::Left => Rect::left_half(area),
        SnapState::Right => Rect::right_half(area),
        SnapState::Maximized => Rect::fill(area),
        SnapState::None => Rect::from_pos_size(
            window.position,
            window.size.unwrap_or_else(|| default_size(window.kind)),
        ),
    }
}
