//! Persistence module
//!
//! Settings are the only persisted state; windows and tabs start empty on
//! every boot.

mod snapshot;

pub use snapshot::{SettingsError, SettingsSnapshot};
