//! Activity monitor simulation
//!
//! Cosmetic per-process CPU figures. The ticker only reads the window list;
//! nothing here feeds back into the window store.

use std::collections::BTreeMap;

use asterix_hal::Platform;
use serde::{Deserialize, Serialize};

use crate::process::ProcessInfo;
use crate::window::{Window, WindowId};

/// Simulated total system memory in MB
pub const SYSTEM_MEMORY_MB: u32 = 8_192;

const CPU_MIN: f32 = 0.1;
const CPU_MAX: f32 = 40.0;
const SEED_MAX: f32 = 15.0;
const FALLBACK_CPU: f32 = 5.0;

/// Random-walk CPU percentages keyed by window id
#[derive(Clone, Debug, Default)]
pub struct CpuTicker {
    cpu: BTreeMap<WindowId, f32>,
    seeded_for: usize,
}

impl CpuTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick.
    ///
    /// When the number of processes changed since the last tick every value
    /// is reseeded in `[0, 15)`; otherwise each value moves by
    /// `(r - 0.48) * 3` and is clamped to `[0.1, 40]`.
    pub fn tick<P: Platform>(&mut self, hal: &P, windows: &[Window]) {
        if windows.len() != self.seeded_for || self.cpu.is_empty() {
            self.reseed(hal, windows);
            return;
        }
        for window in windows {
            let current = self.cpu.get(&window.id).copied().unwrap_or(FALLBACK_CPU);
            let delta = (unit(hal) - 0.48) * 3.0;
            self.cpu
                .insert(window.id.clone(), (current + delta).clamp(CPU_MIN, CPU_MAX));
        }
    }

    fn reseed<P: Platform>(&mut self, hal: &P, windows: &[Window]) {
        self.cpu = windows
            .iter()
            .map(|w| (w.id.clone(), unit(hal) * SEED_MAX))
            .collect();
        self.seeded_for = windows.len();
    }

    /// CPU percentage of a window (0 when unknown)
    pub fn cpu(&self, id: &str) -> f32 {
        self.cpu.get(id).copied().unwrap_or(0.0)
    }

    /// Sum over all tracked processes
    pub fn total(&self) -> f32 {
        self.cpu.values().sum()
    }
}

fn unit<P: Platform>(hal: &P) -> f32 {
    hal.random_unit().unwrap_or(0.5)
}

/// Column the activity monitor sorts by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessSort {
    Pid,
    #[default]
    Cpu,
    Mem,
}

/// Sort process rows for display
pub fn sort_processes(rows: &mut [ProcessInfo], by: ProcessSort, ticker: &CpuTicker) {
    match by {
        ProcessSort::Pid => rows.sort_by_key(|r| r.pid),
        ProcessSort::Mem => rows.sort_by(|a, b| b.memory_mb.cmp(&a.memory_mb)),
        ProcessSort::Cpu => rows.sort_by(|a, b| {
            ticker
                .cpu(&b.window_id)
                .total_cmp(&ticker.cpu(&a.window_id))
        }),
    }
}

/// Total simulated memory of all processes
pub fn memory_total(windows: &[Window]) -> u32 {
    windows.iter().map(|w| w.memory_mb).sum()
}
