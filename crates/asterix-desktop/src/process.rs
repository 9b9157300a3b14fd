//! Simulated process attributes
//!
//! Every window is one simulated process. Memory is drawn once at open time
//! from a range that depends on the application kind.

use asterix_hal::Platform;
use asterix_vfs::AppKind;
use serde::Serialize;

use crate::window::{Window, WindowId};

/// Simulated memory range in MB for a kind, inclusive
pub fn memory_range(kind: AppKind) -> (u32, u32) {
    match kind {
        AppKind::Terminal => (80, 140),
        AppKind::FileExplorer => (60, 110),
        AppKind::ProjectViewer => (120, 220),
        AppKind::Settings => (40, 70),
        AppKind::Properties => (35, 60),
        AppKind::Browser => (150, 260),
        AppKind::Preview => (140, 240),
        AppKind::DocumentViewer => (70, 130),
        AppKind::Notepad => (30, 60),
        AppKind::ImageViewer => (90, 180),
        AppKind::ActivityMonitor => (50, 90),
        AppKind::Links | AppKind::Status => (30, 55),
    }
}

/// Draw a memory footprint uniformly from the kind's range.
///
/// Falls back to the middle of the range when the platform has no entropy.
pub fn simulate_memory<P: Platform>(hal: &P, kind: AppKind) -> u32 {
    let (lo, hi) = memory_range(kind);
    match hal.random_unit() {
        Ok(r) => lo + ((hi - lo) as f32 * r).round() as u32,
        Err(e) => {
            hal.debug_write(&format!(
                "[windows] entropy unavailable ({}), using midpoint memory for {}",
                e,
                kind.as_str()
            ));
            lo + (hi - lo) / 2
        }
    }
}

/// One row of the process table (`ps`, activity monitor)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    pub pid: u32,
    pub window_id: WindowId,
    pub title: String,
    pub kind: AppKind,
    pub memory_mb: u32,
    pub uptime_ms: u64,
    pub minimized: bool,
}

impl ProcessInfo {
    /// Describe a window as seen at `now_ms`
    pub fn from_window(window: &Window, now_ms: u64) -> Self {
        Self {
            pid: window.pid,
            window_id: window.id.clone(),
            title: window.title.clone(),
            kind: window.kind,
            memory_mb: window.memory_mb,
            uptime_ms: now_ms.saturating_sub(window.started_at_ms),
            minimized: window.minimized,
        }
    }
}

/// Short human-readable uptime (`42s`, `3m`, `2h 05m`)
pub fn format_uptime(ms: u64) -> String {
    let secs = ms / 1000;
    match secs {
        0..=59 => format!("{}s", secs),
        60..=3599 => format!("{}m", secs / 60),
        _ => format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60),
    }
}
