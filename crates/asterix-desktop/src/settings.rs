//! User settings
//!
//! The only state that survives a reload. See [`crate::persistence`] for the
//! stored form.

use asterix_vfs::{RepoFilter, SortMode};
use serde::{Deserialize, Serialize};

/// Persisted user preferences
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub show_archived: bool,
    pub show_forked: bool,
    pub sort_mode: SortMode,
    pub compact_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "carbon".to_string(),
            show_archived: false,
            show_forked: false,
            sort_mode: SortMode::LastUpdated,
            compact_mode: false,
        }
    }
}

impl Settings {
    /// Repository filter described by these settings
    pub fn repo_filter(&self) -> RepoFilter {
        RepoFilter {
            show_archived: self.show_archived,
            show_forked: self.show_forked,
            sort: self.sort_mode,
        }
    }

    /// Merge a partial update
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(v) = patch.show_archived {
            self.show_archived = v;
        }
        if let Some(v) = patch.show_forked {
            self.show_forked = v;
        }
        if let Some(v) = patch.sort_mode {
            self.sort_mode = v;
        }
        if let Some(v) = patch.compact_mode {
            self.compact_mode = v;
        }
    }
}

/// Partial settings update; `None` fields are left alone
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub show_archived: Option<bool>,
    pub show_forked: Option<bool>,
    pub sort_mode: Option<SortMode>,
    pub compact_mode: Option<bool>,
}
