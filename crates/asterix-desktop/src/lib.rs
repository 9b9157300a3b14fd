//! Desktop core for Asterix OS
//!
//! This crate holds the state behind the web desktop:
//! - Window store (open, focus, minimize, snap, maximize, restore, z-order)
//! - Simulated processes and the task manager's CPU ticker
//! - Notifications with expiry
//! - Persisted user settings
//! - The kernel facade that turns intents into store operations
//! - The terminal shell and the command palette
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window lifecycle and layout
//! - [`kernel`]: Facade over the window store, browser store and repositories
//! - [`shell`]: Terminal command interpreter
//! - [`persistence`]: Versioned settings snapshot
//!
//! ## Example
//!
//! ```rust
//! use asterix_desktop::{Kernel, OpenOptions};
//! use asterix_hal_mock::MockPlatform;
//! use asterix_vfs::AppKind;
//!
//! let mut kernel = Kernel::new(MockPlatform::with_time(1_000));
//! let id = kernel.open_app(AppKind::Terminal, OpenOptions::default());
//! assert_eq!(kernel.windows().focused(), Some(id.as_str()));
//! ```
//!
//! All state is plain Rust and runs under the mock platform in tests. The
//! browser bindings live behind the `wasm` feature.

pub mod commands;
pub mod kernel;
pub mod math;
pub mod monitor;
pub mod notify;
pub mod persistence;
pub mod process;
pub mod settings;
pub mod shell;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use commands::{PaletteAction, PaletteCommand, COMMANDS};
pub use kernel::{Kernel, KernelConfig, OpenOptions, OpenOutcome, RepositoryDetails};
pub use math::{Rect, Size, Vec2};
pub use monitor::{CpuTicker, ProcessSort};
pub use notify::{Notification, NotificationQueue, Severity};
pub use persistence::{SettingsError, SettingsSnapshot};
pub use process::ProcessInfo;
pub use settings::{Settings, SettingsPatch};
pub use shell::{CommandOutput, Shell};
pub use window::{SnapState, Window, WindowConfig, WindowId, WindowManager};
