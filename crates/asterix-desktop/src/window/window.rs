//! Window struct and snap state

use asterix_vfs::{AppKind, LaunchPayload};
use serde::{Deserialize, Serialize};

use super::WindowId;
use crate::math::{Size, Vec2};

/// Snap state of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapState {
    /// Free-form geometry
    #[default]
    None,
    /// Left half of the viewport
    Left,
    /// Right half of the viewport
    Right,
    /// Whole viewport above the taskbar
    Maximized,
}

impl SnapState {
    /// Parse a snap target name
    pub fn parse(tag: &str) -> Option<SnapState> {
        match tag {
            "none" => Some(SnapState::None),
            "left" => Some(SnapState::Left),
            "right" => Some(SnapState::Right),
            "maximized" => Some(SnapState::Maximized),
            _ => None,
        }
    }
}

/// Free-form geometry captured before a snap or maximize
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGeometry {
    pub position: Vec2,
    pub size: Option<Size>,
}

/// A simulated running application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier, never reused within a session
    pub id: WindowId,
    /// Process id, assigned once at open
    pub pid: u32,
    /// Application kind
    pub kind: AppKind,
    pub title: String,
    /// Top-left corner
    pub position: Vec2,
    /// Explicit size (None = the kind's default size)
    pub size: Option<Size>,
    pub minimized: bool,
    pub snap: SnapState,
    /// Restore point for the current snap/maximize episode
    pub saved: Option<SavedGeometry>,
    /// Wall-clock creation time (ms since epoch)
    pub started_at_ms: u64,
    /// Simulated memory footprint, fixed at creation
    pub memory_mb: u32,
    /// Kind-specific launch data, opaque to the store
    pub payload: LaunchPayload,
}

impl Window {
    /// Whether the window is maximized
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.snap == SnapState::Maximized
    }

    /// Capture the current geometry unless a restore point already exists
    pub(crate) fn save_geometry(&mut self) {
        if self.saved.is_none() {
            self.saved = Some(SavedGeometry {
                position: self.position,
                size: self.size,
            });
        }
    }

    /// Return to the saved geometry, or keep the current one
    pub(crate) fn restore_geometry(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.position = saved.position;
            self.size = saved.size;
        }
        self.snap = SnapState::None;
    }
}
