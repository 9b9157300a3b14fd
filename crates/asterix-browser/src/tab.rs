//! Tabs and per-window browser instances

use serde::{Deserialize, Serialize};


/// Unique tab identifier
pub type TabId = String;

/// One browser tab with its own linear history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserTab {
    pub id: TabId,
    /// Canonical URL currently shown
    pub url: String,
    /// Human-readable title
    pub title: String,
    /// Every URL visited in this tab
    pub history: Vec<String>,
    /// Position in `history`
    pub hist_index: usize,
}

impl BrowserTab {
    /// Create a tab whose history starts at `url`
    pub(crate) fn new(id: TabId, url: &str, title: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
            title: title.to_string(),
            history: vec![url.to_string()],
            hist_index: 0,
        }
    }

    /// Push a navigation, discarding any forward entries
    pub(crate) fn navigate(&mut self, url: &str, title: &str) {
        self.history.truncate(self.hist_index + 1);
        self.history.push(url.to_string());
        self.hist_index = self.history.len() - 1;
        self.url = url.to_string();
        self.title = title.to_string();
    }

    /// Move through history by `delta` entries, clamped to the ends
    pub(crate) fn step(&mut self, delta: isize) {
        let last = self.history.len().saturating_sub(1);
        let target = self.hist_index.saturating_add_signed(delta).min(last);
        self.hist_index = target;
        if let Some(url) = self.history.get(target) {
            self.url = url.clone();
        }
    }

    #[inline]
    pub fn can_go_back(&self) -> bool {
        self.hist_index > 0
    }

    #[inline]
    pub fn can_go_forward(&self) -> bool {
        self.hist_index + 1 < self.history.len()
    }
}

/// Tabs of one browser window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInstance {
    /// Tabs in insertion order
    pub tabs: Vec<BrowserTab>,
    pub active_tab_id: TabId,
}

impl BrowserInstance {
    /// The active tab
    pub fn active_tab(&self) -> Option<&BrowserTab> {
        self.tabs.iter().find(|t| t.id == self.active_tab_id)
    }

    pub(crate) fn active_tab_mut(&mut self) -> Option<&mut BrowserTab> {
        let active = &self.active_tab_id;
        self.tabs.iter_mut().find(|t| &t.id == active)
    }

    /// Find a tab by id
    pub fn tab(&self, tab_id: &str) -> Option<&BrowserTab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }
}
