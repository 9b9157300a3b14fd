//! WASM exports for the desktop kernel
//!
//! [`WebPlatform`] implements the platform seam on top of the browser and
//! [`KernelController`] exposes the kernel to the rendering layer. State
//! crosses the boundary as JSON strings.

use asterix_hal::{HalError, Platform, ScreenSize};
use asterix_vfs::{AppKind, LaunchPayload, Repository, SourceError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::commands::search;
use crate::kernel::{Kernel, OpenOptions, OpenOutcome};
use crate::math::Vec2;
use crate::monitor::{memory_total, sort_processes, CpuTicker, ProcessSort, SYSTEM_MEMORY_MB};
use crate::notify::Severity;
use crate::process::ProcessInfo;
use crate::settings::SettingsPatch;
use crate::shell::Shell;
use crate::window::SnapState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Browser-hosted platform
pub struct WebPlatform;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl Platform for WebPlatform {
    fn wallclock_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn random_bytes(&self, buf: &mut [u8]) -> Result<(), HalError> {
        getrandom::getrandom(buf).map_err(|_| HalError::NotSupported)
    }

    fn viewport(&self) -> Option<ScreenSize> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(ScreenSize::new(width as f32, height as f32))
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), HalError> {
        let storage = local_storage().ok_or(HalError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| HalError::QuotaExceeded)
    }

    fn debug_write(&self, msg: &str) {
        log(msg);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SystemStats {
    cpu_total: f32,
    memory_used_mb: u32,
    memory_total_mb: u32,
    process_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessRow {
    #[serde(flatten)]
    info: ProcessInfo,
    cpu: f32,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn parse_severity(tag: &str) -> Severity {
    match tag {
        "success" => Severity::Success,
        "warning" => Severity::Warning,
        "error" => Severity::Error,
        _ => Severity::Info,
    }
}

/// Kernel controller for WASM - wraps the kernel with a JS-friendly API
#[wasm_bindgen]
pub struct KernelController {
    kernel: Kernel<WebPlatform>,
    shell: Shell,
    ticker: CpuTicker,
}

impl Default for KernelController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl KernelController {
    /// Boot the kernel
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            kernel: Kernel::new(WebPlatform),
            shell: Shell::new(),
            ticker: CpuTicker::new(),
        }
    }

    // =========================================================================
    // Opening things
    // =========================================================================

    /// Open an application. Returns the window id, or None for an unknown
    /// kind or an unparsable payload.
    #[wasm_bindgen]
    pub fn open_app(
        &mut self,
        kind: &str,
        title: Option<String>,
        x: Option<f32>,
        y: Option<f32>,
        payload_json: Option<String>,
    ) -> Option<String> {
        let kind = AppKind::parse(kind)?;
        let payload = match payload_json {
            Some(json) => serde_json::from_str::<LaunchPayload>(&json).ok()?,
            None => LaunchPayload::None,
        };
        let position = match (x, y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        };
        Some(self.kernel.open_app(
            kind,
            OpenOptions {
                title,
                position,
                payload,
            },
        ))
    }

    /// Open a URL in the browser; returns the resolved route as JSON
    #[wasm_bindgen]
    pub fn open_url(&mut self, input: &str) -> String {
        to_json(&self.kernel.open_url(input))
    }

    /// Open a VFS path; returns the window id when a window was opened
    #[wasm_bindgen]
    pub fn open_path(&mut self, path: &str) -> Option<String> {
        match self.kernel.open_path(path) {
            OpenOutcome::Opened(id) => Some(id),
            _ => None,
        }
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.kernel.close_window(id);
    }

    #[wasm_bindgen]
    pub fn close_all(&mut self) {
        self.kernel.close_all();
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.kernel.focus_window(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.kernel.minimize_window(id);
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) {
        self.kernel.maximize_window(id);
    }

    /// Snap to `none`, `left`, `right` or `maximized`
    #[wasm_bindgen]
    pub fn snap_window(&mut self, id: &str, target: &str) {
        if let Some(target) = SnapState::parse(target) {
            self.kernel.snap_window(id, target);
        }
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: &str) {
        self.kernel.restore_window(id);
    }

    #[wasm_bindgen]
    pub fn update_window_position(&mut self, id: &str, x: f32, y: f32) {
        self.kernel.update_window_position(id, x, y);
    }

    #[wasm_bindgen]
    pub fn update_window_size(&mut self, id: &str, width: f32, height: f32) {
        self.kernel.update_window_size(id, width, height);
    }

    #[wasm_bindgen]
    pub fn z_index(&self, id: &str) -> u32 {
        self.kernel.z_index(id)
    }

    /// Pixel frame of a window as JSON (`null` when unknown)
    #[wasm_bindgen]
    pub fn get_window_frame_json(&self, id: &str) -> String {
        to_json(&self.kernel.window_frame(id))
    }

    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        to_json(self.kernel.windows().windows())
    }

    #[wasm_bindgen]
    pub fn get_focus_order_json(&self) -> String {
        to_json(self.kernel.windows().focus_order())
    }

    // =========================================================================
    // Processes
    // =========================================================================

    #[wasm_bindgen]
    pub fn kill_pid(&mut self, pid: u32) -> bool {
        self.kernel.kill_pid(pid)
    }

    #[wasm_bindgen]
    pub fn kill_id(&mut self, id: &str) -> bool {
        self.kernel.kill_id(id)
    }

    /// Advance the cosmetic CPU simulation
    #[wasm_bindgen]
    pub fn cpu_tick(&mut self) {
        self.ticker
            .tick(self.kernel.hal(), self.kernel.windows().windows());
    }

    /// Process rows with CPU figures, sorted by `pid`, `cpu` or `mem`
    #[wasm_bindgen]
    pub fn get_processes_json(&self, sort: &str) -> String {
        let by = match sort {
            "pid" => ProcessSort::Pid,
            "mem" => ProcessSort::Mem,
            _ => ProcessSort::Cpu,
        };
        let mut infos = self.kernel.process_list();
        sort_processes(&mut infos, by, &self.ticker);
        let rows: Vec<ProcessRow> = infos
            .into_iter()
            .map(|info| ProcessRow {
                cpu: self.ticker.cpu(&info.window_id),
                info,
            })
            .collect();
        to_json(&rows)
    }

    /// Totals for the activity monitor header
    #[wasm_bindgen]
    pub fn get_system_stats_json(&self) -> String {
        let windows = self.kernel.windows().windows();
        to_json(&SystemStats {
            cpu_total: self.ticker.total(),
            memory_used_mb: memory_total(windows),
            memory_total_mb: SYSTEM_MEMORY_MB,
            process_count: windows.len(),
        })
    }

    // =========================================================================
    // Browser
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_browser_json(&self, window_id: &str) -> String {
        to_json(&self.kernel.browsers().instance(window_id))
    }

    /// Resolve address-bar input for one browser window; returns the route
    #[wasm_bindgen]
    pub fn browser_navigate(&mut self, window_id: &str, input: &str) -> String {
        to_json(&self.kernel.navigate_browser(window_id, input))
    }

    #[wasm_bindgen]
    pub fn browser_new_tab(&mut self, window_id: &str, url: Option<String>) -> Option<String> {
        self.kernel
            .browsers_mut()
            .new_tab(window_id, url.as_deref())
    }

    #[wasm_bindgen]
    pub fn browser_close_tab(&mut self, window_id: &str, tab_id: &str) {
        self.kernel.browsers_mut().close_tab(window_id, tab_id);
    }

    #[wasm_bindgen]
    pub fn browser_switch_tab(&mut self, window_id: &str, tab_id: &str) {
        self.kernel.browsers_mut().switch_tab(window_id, tab_id);
    }

    #[wasm_bindgen]
    pub fn browser_back(&mut self, window_id: &str) {
        self.kernel.browsers_mut().go_back(window_id);
    }

    #[wasm_bindgen]
    pub fn browser_forward(&mut self, window_id: &str) {
        self.kernel.browsers_mut().go_forward(window_id);
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    #[wasm_bindgen]
    pub fn notify(&mut self, message: &str, severity: &str) -> String {
        self.kernel.notify(message, parse_severity(severity))
    }

    #[wasm_bindgen]
    pub fn dismiss_notification(&mut self, id: &str) {
        self.kernel.dismiss_notification(id);
    }

    /// Expire notifications; call from a timer
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        let now = self.kernel.hal().wallclock_ms();
        self.kernel.tick(now);
    }

    #[wasm_bindgen]
    pub fn get_notifications_json(&self) -> String {
        to_json(self.kernel.notifications().entries())
    }

    // =========================================================================
    // Repositories
    // =========================================================================

    #[wasm_bindgen]
    pub fn begin_refresh(&mut self) {
        self.kernel.begin_refresh();
    }

    /// Hand over a fetched repository list (GitHub REST JSON array)
    #[wasm_bindgen]
    pub fn complete_refresh(&mut self, repos_json: &str) -> usize {
        let result = serde_json::from_str::<Vec<Repository>>(repos_json)
            .map_err(|e| SourceError::malformed(e.to_string()));
        self.kernel.complete_refresh(result)
    }

    /// Report a failed fetch
    #[wasm_bindgen]
    pub fn fail_refresh(&mut self, status: u16, reason: &str) {
        self.kernel
            .complete_refresh(Err(SourceError::status(status, reason)));
    }

    /// Repositories as filtered and sorted by the settings
    #[wasm_bindgen]
    pub fn get_repos_json(&self) -> String {
        to_json(&self.kernel.visible_repositories())
    }

    #[wasm_bindgen]
    pub fn repos_loading(&self) -> bool {
        self.kernel.repos_loading()
    }

    // =========================================================================
    // Settings, palette and terminal
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_settings_json(&self) -> String {
        to_json(self.kernel.settings())
    }

    /// Merge a partial settings object; false if it does not parse
    #[wasm_bindgen]
    pub fn update_settings(&mut self, patch_json: &str) -> bool {
        match serde_json::from_str::<SettingsPatch>(patch_json) {
            Ok(patch) => {
                self.kernel.update_settings(patch);
                true
            }
            Err(_) => false,
        }
    }

    #[wasm_bindgen]
    pub fn get_commands_json(&self, query: &str) -> String {
        to_json(&search(query))
    }

    #[wasm_bindgen]
    pub fn run_command(&mut self, id: &str) -> bool {
        self.kernel.run_command(id)
    }

    /// Keyboard shortcut from the palette; only the first character of `key` counts
    #[wasm_bindgen]
    pub fn run_shortcut(&mut self, key: &str) -> bool {
        match key.chars().next() {
            Some(c) => self.kernel.run_shortcut(c),
            None => false,
        }
    }

    #[wasm_bindgen]
    pub fn shell_prompt(&self) -> String {
        self.shell.prompt()
    }

    /// Run a terminal line; returns the output as JSON
    #[wasm_bindgen]
    pub fn shell_execute(&mut self, line: &str) -> String {
        to_json(&self.shell.execute(&mut self.kernel, line))
    }
}
