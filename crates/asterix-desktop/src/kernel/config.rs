//! Kernel configuration

use asterix_vfs::OWNER;

use crate::notify::NOTIFICATION_TTL_MS;
use crate::window::{BASE_Z, CASCADE_STEP};

/// Storage key the settings snapshot lives under
pub const SETTINGS_KEY: &str = "asterix-os-storage";

/// Kernel configuration
#[derive(Clone, Debug, PartialEq)]
pub struct KernelConfig {
    /// GitHub account whose repositories are presented
    pub owner: String,
    /// Storage key for the settings snapshot
    pub settings_key: String,
    /// How long notifications stay visible
    pub notification_ttl_ms: u64,
    /// Cascade offset between windows opened without a position
    pub cascade_step: f32,
    /// z-index of the window furthest back
    pub base_z: u32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            owner: OWNER.to_string(),
            settings_key: SETTINGS_KEY.to_string(),
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            cascade_step: CASCADE_STEP,
            base_z: BASE_Z,
        }
    }
}
