//! Kernel facade
//!
//! The single entry point for terminal commands, the command palette,
//! desktop icons and context menus. It turns intents ("open this path",
//! "open this URL") into window store and browser store operations and
//! pushes notifications describing the outcome.

mod config;
mod repos;

pub use config::{KernelConfig, SETTINGS_KEY};
pub use repos::{RepositoryDetails, COMMIT_LIMIT};

use asterix_browser::{resolve_url_for_owner, BrowserStore, ResolvedRoute};
use asterix_hal::Platform;
use asterix_vfs::{resolve_path, AppKind, LaunchPayload, NodeKind, Repository, VfsNode};

use crate::commands::{by_shortcut, find_command, PaletteAction, PaletteCommand};
use crate::math::{Rect, Size, Vec2};
use crate::notify::{NotificationQueue, Severity};
use crate::persistence::SettingsSnapshot;
use crate::process::ProcessInfo;
use crate::settings::{Settings, SettingsPatch};
use crate::window::{snap_frame, SnapState, WindowConfig, WindowId, WindowManager};

/// Title of a browser window opened for a URL
pub const BROWSER_TITLE: &str = "Asterix Browser";

/// Options for [`Kernel::open_app`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenOptions {
    /// Window title (None = the kind's default title for the payload)
    pub title: Option<String>,
    /// Window position (None = cascade)
    pub position: Option<Vec2>,
    pub payload: LaunchPayload,
}

impl OpenOptions {
    /// Options carrying only a payload
    pub fn payload(payload: LaunchPayload) -> Self {
        Self {
            payload,
            ..Default::default()
        }
    }
}

/// Result of [`Kernel::open_path`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// An application window was opened or focused
    Opened(WindowId),
    /// The path is a directory; nothing was opened
    Directory(String),
    /// Nothing exists at the path
    NotFound,
}

/// Desktop kernel
///
/// Owns the window store, the browser store, the notification queue, the
/// repository list and the settings. All platform access goes through `P`.
pub struct Kernel<P: Platform> {
    hal: P,
    config: KernelConfig,
    windows: WindowManager,
    browsers: BrowserStore,
    notifications: NotificationQueue,
    repos: Vec<Repository>,
    repos_loading: bool,
    settings: Settings,
}

impl<P: Platform> Kernel<P> {
    /// Boot a kernel with the default configuration
    pub fn new(hal: P) -> Self {
        Self::with_config(hal, KernelConfig::default())
    }

    /// Boot a kernel, restoring persisted settings
    pub fn with_config(hal: P, config: KernelConfig) -> Self {
        let settings = load_settings(&hal, &config.settings_key);
        hal.debug_write(&format!(
            "[kernel] booted for {} (theme {})",
            config.owner, settings.theme
        ));
        Self {
            windows: WindowManager::with_layout(config.base_z, config.cascade_step),
            notifications: NotificationQueue::new(config.notification_ttl_ms),
            browsers: BrowserStore::new(),
            repos: Vec::new(),
            repos_loading: true,
            settings,
            config,
            hal,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn hal(&self) -> &P {
        &self.hal
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Window store (read-only; mutate through the kernel)
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn browsers(&self) -> &BrowserStore {
        &self.browsers
    }

    /// Browser store, for tab strip and back/forward controls
    pub fn browsers_mut(&mut self) -> &mut BrowserStore {
        &mut self.browsers
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // =========================================================================
    // Opening things
    // =========================================================================

    /// Open (or focus) an application window.
    ///
    /// Browser windows get a browser instance seeded from a `Url` payload.
    pub fn open_app(&mut self, kind: AppKind, options: OpenOptions) -> WindowId {
        let title = options
            .title
            .unwrap_or_else(|| kind.default_title(&options.payload));
        let mut config = WindowConfig::new(kind, title).with_payload(options.payload);
        config.position = options.position;

        let id = self.windows.open_window(&self.hal, config);
        if kind == AppKind::Browser {
            let initial = self
                .windows
                .get(&id)
                .and_then(|w| w.payload.url_str())
                .map(str::to_string);
            self.browsers.init_instance(&id, initial.as_deref());
        }
        id
    }

    /// Resolve address-bar input and show it in a browser.
    ///
    /// Reuses the first browser window (restoring it if minimized) or opens
    /// a new one.
    pub fn open_url(&mut self, input: &str) -> ResolvedRoute {
        let route = self.resolve(input);
        let display = route.display_url();
        let title = route.title();

        let existing = self
            .windows
            .find_by_kind(AppKind::Browser)
            .map(|w| (w.id.clone(), w.minimized));
        match existing {
            Some((id, minimized)) => {
                if minimized {
                    self.windows.restore_window(&id);
                } else {
                    self.windows.focus_window(&id);
                }
                self.browsers.init_instance(&id, None);
                self.browsers.navigate(&id, &display, &title);
            }
            None => {
                let id = self.open_app(
                    AppKind::Browser,
                    OpenOptions {
                        title: Some(BROWSER_TITLE.to_string()),
                        ..OpenOptions::payload(LaunchPayload::url(display.clone()))
                    },
                );
                if let Some(tab_id) = self.browsers.active_tab(&id).map(|t| t.id.clone()) {
                    self.browsers.update_tab_title(&id, &tab_id, &title);
                }
            }
        }

        self.hal.debug_write(&format!(
            "[kernel] open_url {:?} -> {:?} {}",
            input,
            route.kind(),
            display
        ));
        route
    }

    /// Resolve input and navigate the active tab of one browser window
    pub fn navigate_browser(&mut self, window_id: &str, input: &str) -> ResolvedRoute {
        let route = self.resolve(input);
        self.browsers
            .navigate(window_id, &route.display_url(), &route.title());
        route
    }

    fn resolve(&self, input: &str) -> ResolvedRoute {
        resolve_url_for_owner(input, &self.config.owner, &self.repos)
    }

    /// Open whatever lives at an absolute VFS path.
    ///
    /// Symbolic links are followed one hop.
    pub fn open_path(&mut self, path: &str) -> OpenOutcome {
        let node = match resolve_path(path, &self.repos) {
            Some(VfsNode {
                kind: NodeKind::Link { target },
                ..
            }) => resolve_path(&target, &self.repos),
            other => other,
        };

        match node {
            Some(VfsNode {
                kind: NodeKind::App {
                    app,
                    title,
                    payload,
                },
                ..
            }) => {
                let id = self.open_app(
                    app,
                    OpenOptions {
                        title: Some(title),
                        ..OpenOptions::payload(payload)
                    },
                );
                OpenOutcome::Opened(id)
            }
            Some(node) => {
                self.notify(
                    format!("{} is a directory, use cd to navigate", path),
                    Severity::Info,
                );
                OpenOutcome::Directory(node.path)
            }
            None => {
                self.notify(format!("No such path: {}", path), Severity::Error);
                OpenOutcome::NotFound
            }
        }
    }

    // =========================================================================
    // Window operations
    // =========================================================================

    /// Close a window and drop its browser instance
    pub fn close_window(&mut self, id: &str) {
        if self.windows.close_window(id).is_some() {
            self.browsers.destroy_instance(id);
        }
    }

    /// Close every window and every browser instance
    pub fn close_all(&mut self) {
        self.windows.close_all();
        self.browsers.clear();
    }

    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus_window(id);
    }

    pub fn minimize_window(&mut self, id: &str) {
        self.windows.minimize_window(id);
    }

    pub fn maximize_window(&mut self, id: &str) {
        self.windows.maximize_window(id);
    }

    pub fn snap_window(&mut self, id: &str, target: SnapState) {
        self.windows.snap_window(id, target);
    }

    pub fn restore_window(&mut self, id: &str) {
        self.windows.restore_window(id);
    }

    pub fn update_window_position(&mut self, id: &str, x: f32, y: f32) {
        self.windows.update_window_position(id, x, y);
    }

    pub fn update_window_size(&mut self, id: &str, width: f32, height: f32) {
        self.windows.update_window_size(id, width, height);
    }

    pub fn z_index(&self, id: &str) -> u32 {
        self.windows.z_index(id)
    }

    /// Pixel frame of a window in the current viewport
    pub fn window_frame(&self, id: &str) -> Option<Rect> {
        let window = self.windows.get(id)?;
        let viewport = Size::from(self.hal.viewport()?);
        Some(snap_frame(window, viewport))
    }

    // =========================================================================
    // Processes
    // =========================================================================

    /// Kill the process with `pid`. Returns whether one was found.
    pub fn kill_pid(&mut self, pid: u32) -> bool {
        let Some(window) = self.windows.find_by_pid(pid) else {
            return false;
        };
        let (id, title) = (window.id.clone(), window.title.clone());
        self.close_window(&id);
        self.notify(
            format!("Process PID {} (\"{}\") terminated", pid, title),
            Severity::Warning,
        );
        true
    }

    /// Kill the process owning window `id`. Returns whether it existed.
    pub fn kill_id(&mut self, id: &str) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        let title = window.title.clone();
        self.close_window(id);
        self.notify(format!("Process \"{}\" terminated", title), Severity::Warning);
        true
    }

    /// Process table ordered by PID
    pub fn process_list(&self) -> Vec<ProcessInfo> {
        let now = self.hal.wallclock_ms();
        let mut rows: Vec<ProcessInfo> = self
            .windows
            .windows()
            .iter()
            .map(|w| ProcessInfo::from_window(w, now))
            .collect();
        rows.sort_by_key(|r| r.pid);
        rows
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Push a notification; returns its id
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> String {
        let message = message.into();
        self.hal
            .debug_write(&format!("[kernel] notify {}: {}", severity.as_str(), message));
        let now = self.hal.wallclock_ms();
        self.notifications.push(message, severity, now)
    }

    pub fn dismiss_notification(&mut self, id: &str) {
        self.notifications.dismiss(id);
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Timer tick: expire notifications whose time is up
    pub fn tick(&mut self, now: u64) {
        self.notifications.expire(now);
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Merge a settings update and persist it
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
        let snapshot = SettingsSnapshot::new(self.settings.clone());
        if let Err(e) = snapshot.save(&self.hal, &self.config.settings_key) {
            self.hal
                .debug_write(&format!("[settings] save failed: {}", e));
            self.notify("Settings could not be saved", Severity::Warning);
        }
    }

    // =========================================================================
    // Command palette
    // =========================================================================

    /// Run a palette command by id. Returns false for unknown ids.
    pub fn run_command(&mut self, id: &str) -> bool {
        match find_command(id) {
            Some(command) => {
                self.run_palette(command);
                true
            }
            None => false,
        }
    }

    /// Run the command bound to a single-key shortcut, ignoring case.
    pub fn run_shortcut(&mut self, key: char) -> bool {
        match by_shortcut(key) {
            Some(command) => {
                self.run_palette(command);
                true
            }
            None => false,
        }
    }

    fn run_palette(&mut self, command: &PaletteCommand) {
        match command.action {
            PaletteAction::Open(kind) => {
                self.open_app(kind, OpenOptions::default());
            }
            PaletteAction::RefreshRepos => self.begin_refresh(),
            PaletteAction::CloseAll => self.close_all(),
        }
    }
}

fn load_settings<P: Platform>(hal: &P, key: &str) -> Settings {
    match SettingsSnapshot::load(hal, key) {
        Ok(Some(snapshot)) => snapshot.settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            hal.debug_write(&format!("[settings] using defaults: {}", e));
            Settings::default()
        }
    }
}
