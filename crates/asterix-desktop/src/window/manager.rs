//! Window manager for lifecycle, focus order, and z-order

use asterix_hal::Platform;
use asterix_vfs::AppKind;

use super::layout::default_position;
use super::{SnapState, Window, WindowConfig, WindowId};
use crate::math::{Size, Vec2};
use crate::process::simulate_memory;

/// Default z-index of the window furthest back
pub const BASE_Z: u32 = 10;

/// Default cascade offset between successive windows
pub const CASCADE_STEP: f32 = 22.0;

/// Window manager handling window lifecycle, z-order, and focus
///
/// Every operation taking a window id is a no-op for unknown ids.
#[derive(Clone, Debug)]
pub struct WindowManager {
    /// All windows in open order
    windows: Vec<Window>,
    /// Focus order (most recently focused at end, minimized windows absent)
    focus_order: Vec<WindowId>,
    /// Next process id (never reused)
    next_pid: u32,
    base_z: u32,
    cascade_step: f32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self::with_layout(BASE_Z, CASCADE_STEP)
    }

    /// Create a window manager with a custom z base and cascade step
    pub fn with_layout(base_z: u32, cascade_step: f32) -> Self {
        Self {
            windows: Vec::new(),
            focus_order: Vec::new(),
            next_pid: 1,
            base_z,
            cascade_step,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window, or focus the one already open with the same kind and title.
    ///
    /// Returns the id of the new or existing window. Focusing an existing
    /// window consumes no PID.
    pub fn open_window<P: Platform>(&mut self, hal: &P, config: WindowConfig) -> WindowId {
        if let Some(existing) = self.find_by_kind_title(config.kind, &config.title) {
            let id = existing.id.clone();
            self.focus_window(&id);
            return id;
        }

        let pid = self.next_pid;
        self.next_pid += 1;

        let now = hal.wallclock_ms();
        let id = format!("{}-{}-{}", config.kind.as_str(), pid, now);
        let position = config.position.unwrap_or_else(|| {
            default_position(
                hal.viewport().map(Size::from),
                self.visible_count(),
                self.cascade_step,
            )
        });

        let window = Window {
            id: id.clone(),
            pid,
            kind: config.kind,
            title: config.title,
            position,
            size: config.size,
            minimized: false,
            snap: SnapState::None,
            saved: None,
            started_at_ms: now,
            memory_mb: simulate_memory(hal, config.kind),
            payload: config.payload,
        };

        hal.debug_write(&format!(
            "[windows] opened {} (PID {}, {} MB)",
            window.title, pid, window.memory_mb
        ));

        self.windows.push(window);
        self.focus_order.push(id.clone());
        id
    }

    /// Close a window. The PID counter is untouched.
    pub fn close_window(&mut self, id: &str) -> Option<Window> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        self.focus_order.retain(|fid| fid != id);
        Some(self.windows.remove(index))
    }

    /// Close every window
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.focus_order.clear();
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Bring a window to the front, un-minimizing it
    pub fn focus_window(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = false;
        self.bring_to_front(id);
    }

    /// Minimize a window; it leaves the focus order
    pub fn minimize_window(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = true;
        self.focus_order.retain(|fid| fid != id);
    }

    fn bring_to_front(&mut self, id: &str) {
        self.focus_order.retain(|fid| fid != id);
        self.focus_order.push(id.to_string());
    }

    // =========================================================================
    // Snap / maximize
    // =========================================================================

    /// Maximize a window, saving its free-form geometry
    pub fn maximize_window(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.save_geometry();
        window.snap = SnapState::Maximized;
        window.minimized = false;
        self.bring_to_front(id);
    }

    /// Apply a snap target.
    ///
    /// `None` returns to the saved geometry (or keeps the current geometry
    /// when nothing was saved). Other targets save the geometry once per
    /// snapped episode and set the flag; pixel geometry is derived by
    /// [`snap_frame`](super::snap_frame). A minimized window is shown again.
    pub fn snap_window(&mut self, id: &str, target: SnapState) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        match target {
            SnapState::None => window.restore_geometry(),
            _ => {
                window.save_geometry();
                window.snap = target;
            }
        }
        window.minimized = false;
        self.bring_to_front(id);
    }

    /// Un-snap, un-maximize and un-minimize a window
    pub fn restore_window(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.restore_geometry();
        window.minimized = false;
        self.bring_to_front(id);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Move a window. Dragging a snapped window un-snaps it and starts a new
    /// free-form episode.
    pub fn update_window_position(&mut self, id: &str, x: f32, y: f32) {
        if let Some(window) = self.get_mut(id) {
            window.position = Vec2::new(x, y);
            if window.snap != SnapState::None {
                window.snap = SnapState::None;
                window.saved = None;
            }
        }
    }

    /// Resize a window. Snap state is kept.
    pub fn update_window_size(&mut self, id: &str, width: f32, height: f32) {
        if let Some(window) = self.get_mut(id) {
            window.size = Some(Size::new(width, height));
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// z-index: base plus the position in focus order. Windows outside the
    /// focus order (minimized or unknown) sit at the base.
    pub fn z_index(&self, id: &str) -> u32 {
        self.focus_order
            .iter()
            .position(|fid| fid == id)
            .map_or(self.base_z, |index| self.base_z + index as u32)
    }

    /// Frontmost window
    pub fn focused(&self) -> Option<&str> {
        self.focus_order.last().map(String::as_str)
    }

    /// Focus order, back to front
    pub fn focus_order(&self) -> &[WindowId] {
        &self.focus_order
    }

    /// All windows in open order
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| self.z_index(&w.id));
        windows
    }

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Find a window by process id
    pub fn find_by_pid(&self, pid: u32) -> Option<&Window> {
        self.windows.iter().find(|w| w.pid == pid)
    }

    /// First window of a kind, in open order
    pub fn find_by_kind(&self, kind: AppKind) -> Option<&Window> {
        self.windows.iter().find(|w| w.kind == kind)
    }

    fn find_by_kind_title(&self, kind: AppKind, title: &str) -> Option<&Window> {
        self.windows
            .iter()
            .find(|w| w.kind == kind && w.title == title)
    }

    /// Number of windows that are not minimized
    pub fn visible_count(&self) -> usize {
        self.windows.iter().filter(|w| !w.minimized).count()
    }

    /// PID the next opened window will get
    pub fn next_pid(&self) -> u32 {
        self.next_pid
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}
