//! Window/process store
//!
//! Window lifecycle, focus order, minimize/maximize/snap transitions and the
//! layout policy a renderer uses to place windows.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod layout;
mod manager;

pub use config::WindowConfig;
pub use layout::{default_position, default_size, snap_frame, TASKBAR_HEIGHT};
pub use manager::{WindowManager, BASE_Z, CASCADE_STEP};
pub use window::{SavedGeometry, SnapState, Window};

/// Unique window identifier (`<kind>-<pid>-<timestamp>`)
pub type WindowId = String;
