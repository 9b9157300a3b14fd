//! Snapshot serialization for persisted settings

use std::fmt;

use asterix_hal::{HalError, Platform};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Errors loading or saving the settings snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// Platform storage refused the operation
    Storage(HalError),
    /// Snapshot could not be serialized
    Encode(String),
    /// Stored value is not a snapshot
    Decode(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Storage(e) => write!(f, "storage error: {}", e),
            SettingsError::Encode(msg) => write!(f, "encode error: {}", msg),
            SettingsError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl From<HalError> for SettingsError {
    fn from(e: HalError) -> Self {
        SettingsError::Storage(e)
    }
}

/// Snapshot of settings for persistence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// Version for migration support
    #[serde(default)]
    pub version: u32,
    pub settings: Settings,
}

/// Version 0: the `{ "state": { "settings": .. }, "version": 0 }` envelope
/// written by the first web release
#[derive(Deserialize)]
struct LegacyEnvelope {
    state: LegacyState,
}

#[derive(Deserialize)]
struct LegacyState {
    settings: Settings,
}

impl SettingsSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(settings: Settings) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            settings,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // v0 -> v1 only changed the envelope
        self.version = Self::CURRENT_VERSION;
    }

    /// Parse a stored value, accepting the legacy envelope
    pub fn decode(json: &str) -> Result<Self, SettingsError> {
        match serde_json::from_str::<SettingsSnapshot>(json) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => match serde_json::from_str::<LegacyEnvelope>(json) {
                Ok(legacy) => Ok(Self {
                    version: 0,
                    settings: legacy.state.settings,
                }),
                Err(_) => Err(SettingsError::Decode(e.to_string())),
            },
        }
    }

    pub fn encode(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(|e| SettingsError::Encode(e.to_string()))
    }

    /// Load the snapshot stored under `key`, migrated to the current version.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    pub fn load<P: Platform>(hal: &P, key: &str) -> Result<Option<Self>, SettingsError> {
        let Some(raw) = hal.storage_get(key) else {
            return Ok(None);
        };
        let mut snapshot = Self::decode(&raw)?;
        if snapshot.needs_migration() {
            hal.debug_write(&format!(
                "[settings] migrating snapshot v{} -> v{}",
                snapshot.version,
                Self::CURRENT_VERSION
            ));
            snapshot.migrate();
        }
        Ok(Some(snapshot))
    }

    /// Store the snapshot under `key`
    pub fn save<P: Platform>(&self, hal: &P, key: &str) -> Result<(), SettingsError> {
        let json = self.encode()?;
        hal.storage_set(key, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterix_hal_mock::MockPlatform;
    use asterix_vfs::SortMode;

    const KEY: &str = "asterix-os-storage";

    #[test]
    fn test_snapshot_creation() {
        let snapshot = SettingsSnapshot::new(Settings::default());
        assert_eq!(snapshot.version, SettingsSnapshot::CURRENT_VERSION);
        assert!(!snapshot.needs_migration());
    }

    #[test]
    fn test_save_and_load() {
        let hal = MockPlatform::new();
        let mut settings = Settings::default();
        settings.theme = "amber".into();
        SettingsSnapshot::new(settings.clone()).save(&hal, KEY).unwrap();

        let loaded = SettingsSnapshot::load(&hal, KEY).unwrap().unwrap();
        assert_eq!(loaded.settings, settings);
    }

    #[test]
    fn test_load_missing() {
        let hal = MockPlatform::new();
        assert_eq!(SettingsSnapshot::load(&hal, KEY), Ok(None));
    }

    #[test]
    fn test_legacy_envelope_is_migrated() {
        let hal = MockPlatform::new();
        hal.seed_storage(
            KEY,
            r#"{"state":{"settings":{"theme":"carbon","showArchived":true,"showForked":false,"sortMode":"stars","compactMode":false}},"version":0}"#,
        );

        let loaded = SettingsSnapshot::load(&hal, KEY).unwrap().unwrap();
        assert_eq!(loaded.version, SettingsSnapshot::CURRENT_VERSION);
        assert!(loaded.settings.show_archived);
        assert_eq!(loaded.settings.sort_mode, SortMode::Stars);
        assert!(hal.has_log_containing("migrating snapshot v0"));
    }

    #[test]
    fn test_corrupt_value() {
        let hal = MockPlatform::new();
        hal.seed_storage(KEY, "not json");
        assert!(matches!(
            SettingsSnapshot::load(&hal, KEY),
            Err(SettingsError::Decode(_))
        ));
    }

    #[test]
    fn test_storage_refused() {
        let hal = MockPlatform::new();
        hal.set_storage_writable(false);
        let err = SettingsSnapshot::new(Settings::default())
            .save(&hal, KEY)
            .unwrap_err();
        assert_eq!(err, SettingsError::Storage(HalError::StorageUnavailable));
    }
}
