//! Per-window browser state store
//!
//! Tabs live as long as their window and are never persisted. Every
//! operation is a silent no-op when given an unknown window or tab id.

use std::collections::BTreeMap;

use crate::tab::{BrowserInstance, BrowserTab, TabId};
use crate::{NEW_TAB_TITLE, NEW_TAB_URL};

/// Browser instances keyed by window id
#[derive(Clone, Debug, Default)]
pub struct BrowserStore {
    instances: BTreeMap<String, BrowserInstance>,
    /// Next tab number (tab ids are unique across instances)
    next_tab: u64,
}

impl BrowserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn make_tab(&mut self, url: &str, title: &str) -> BrowserTab {
        self.next_tab += 1;
        BrowserTab::new(format!("tab-{}", self.next_tab), url, title)
    }

    fn with_active_tab(&mut self, window_id: &str, f: impl FnOnce(&mut BrowserTab)) {
        if let Some(tab) = self
            .instances
            .get_mut(window_id)
            .and_then(BrowserInstance::active_tab_mut)
        {
            f(tab);
        }
    }

    // =========================================================================
    // Instance lifecycle
    // =========================================================================

    /// Create the instance for a window with one tab. Idempotent.
    pub fn init_instance(&mut self, window_id: &str, initial_url: Option<&str>) {
        if self.instances.contains_key(window_id) {
            return;
        }
        let tab = match initial_url {
            Some(url) if url != NEW_TAB_URL => self.make_tab(url, url),
            _ => self.make_tab(NEW_TAB_URL, NEW_TAB_TITLE),
        };
        let instance = BrowserInstance {
            active_tab_id: tab.id.clone(),
            tabs: vec![tab],
        };
        self.instances.insert(window_id.to_string(), instance);
    }

    /// Drop a window's instance
    pub fn destroy_instance(&mut self, window_id: &str) {
        self.instances.remove(window_id);
    }

    /// Drop every instance
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    // =========================================================================
    // Tab management
    // =========================================================================

    /// Append a tab and activate it. The title stays "New Tab" until the
    /// tab navigates.
    pub fn new_tab(&mut self, window_id: &str, url: Option<&str>) -> Option<TabId> {
        if !self.instances.contains_key(window_id) {
            return None;
        }
        let tab = self.make_tab(url.unwrap_or(NEW_TAB_URL), NEW_TAB_TITLE);
        let id = tab.id.clone();
        let instance = self.instances.get_mut(window_id)?;
        instance.tabs.push(tab);
        instance.active_tab_id = id.clone();
        Some(id)
    }

    /// Close a tab. The last tab of an instance is never closed.
    ///
    /// Closing the active tab activates the tab that is now last.
    pub fn close_tab(&mut self, window_id: &str, tab_id: &str) {
        let Some(instance) = self.instances.get_mut(window_id) else {
            return;
        };
        if instance.tabs.len() <= 1 || instance.tab(tab_id).is_none() {
            return;
        }
        instance.tabs.retain(|t| t.id != tab_id);
        if instance.active_tab_id == tab_id {
            if let Some(last) = instance.tabs.last() {
                instance.active_tab_id = last.id.clone();
            }
        }
    }

    /// Activate an existing tab
    pub fn switch_tab(&mut self, window_id: &str, tab_id: &str) {
        if let Some(instance) = self.instances.get_mut(window_id) {
            if instance.tab(tab_id).is_some() {
                instance.active_tab_id = tab_id.to_string();
            }
        }
    }

    /// Rename a tab
    pub fn update_tab_title(&mut self, window_id: &str, tab_id: &str, title: &str) {
        if let Some(tab) = self
            .instances
            .get_mut(window_id)
            .and_then(|i| i.tabs.iter_mut().find(|t| t.id == tab_id))
        {
            tab.title = title.to_string();
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate the active tab, discarding forward history
    pub fn navigate(&mut self, window_id: &str, display_url: &str, title: &str) {
        self.with_active_tab(window_id, |tab| tab.navigate(display_url, title));
    }

    /// Step the active tab one entry back
    pub fn go_back(&mut self, window_id: &str) {
        self.with_active_tab(window_id, |tab| tab.step(-1));
    }

    /// Step the active tab one entry forward
    pub fn go_forward(&mut self, window_id: &str) {
        self.with_active_tab(window_id, |tab| tab.step(1));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Instance of a window
    pub fn instance(&self, window_id: &str) -> Option<&BrowserInstance> {
        self.instances.get(window_id)
    }

    /// All instances, keyed by window id
    pub fn instances(&self) -> &BTreeMap<String, BrowserInstance> {
        &self.instances
    }

    /// Active tab of a window
    pub fn active_tab(&self, window_id: &str) -> Option<&BrowserTab> {
        self.instances.get(window_id)?.active_tab()
    }

    pub fn can_go_back(&self, window_id: &str) -> bool {
        self.active_tab(window_id).is_some_and(BrowserTab::can_go_back)
    }

    pub fn can_go_forward(&self, window_id: &str) -> bool {
        self.active_tab(window_id).is_some_and(BrowserTab::can_go_forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(window_id: &str) -> BrowserStore {
        let mut store = BrowserStore::new();
        store.init_instance(window_id, None);
        store
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut store = store_with("browser-1");
        store.navigate("browser-1", "/settings", "settings");
        store.init_instance("browser-1", Some("https://example.com"));

        let tab = store.active_tab("browser-1").unwrap();
        assert_eq!(tab.url, "/settings");
        assert_eq!(store.instance("browser-1").unwrap().tabs.len(), 1);
    }

    #[test]
    fn test_initial_url() {
        let mut store = BrowserStore::new();
        store.init_instance("w", Some("/projects/PgStudio"));
        let tab = store.active_tab("w").unwrap();
        assert_eq!(tab.history, ["/projects/PgStudio"]);
        assert_eq!(tab.title, "/projects/PgStudio");
    }

    #[test]
    fn test_new_and_close_tabs() {
        let mut store = store_with("w");
        let first = store.active_tab("w").unwrap().id.clone();
        let second = store.new_tab("w", None).unwrap();
        let third = store.new_tab("w", Some("/home")).unwrap();
        assert_eq!(store.active_tab("w").unwrap().id, third);
        assert_eq!(store.active_tab("w").unwrap().url, "/home");
        assert_eq!(store.active_tab("w").unwrap().title, NEW_TAB_TITLE);

        // closing an inactive tab keeps the active one
        store.close_tab("w", &second);
        assert_eq!(store.active_tab("w").unwrap().id, third);

        // closing the active tab activates the last remaining
        store.close_tab("w", &third);
        assert_eq!(store.active_tab("w").unwrap().id, first);

        // the last tab is protected
        store.close_tab("w", &first);
        assert_eq!(store.instance("w").unwrap().tabs.len(), 1);
    }

    #[test]
    fn test_switch_tab_ignores_unknown_ids() {
        let mut store = store_with("w");
        let first = store.active_tab("w").unwrap().id.clone();
        let second = store.new_tab("w", None).unwrap();

        store.switch_tab("w", &first);
        assert_eq!(store.active_tab("w").unwrap().id, first);
        store.switch_tab("w", "tab-999");
        assert_eq!(store.active_tab("w").unwrap().id, first);
        store.switch_tab("w", &second);
        assert_eq!(store.active_tab("w").unwrap().id, second);
    }

    #[test]
    fn test_back_forward() {
        let mut store = store_with("w");
        store.navigate("w", "A", "a");
        store.navigate("w", "B", "b");
        assert!(store.can_go_back("w"));
        assert!(!store.can_go_forward("w"));

        store.go_back("w");
        let tab = store.active_tab("w").unwrap();
        assert_eq!(tab.url, "A");
        assert_eq!(tab.title, "b");
        assert!(store.can_go_forward("w"));

        store.go_forward("w");
        store.go_forward("w");
        assert_eq!(store.active_tab("w").unwrap().url, "B");
    }

    #[test]
    fn test_unknown_window_is_noop() {
        let mut store = BrowserStore::new();
        store.navigate("ghost", "A", "a");
        store.go_back("ghost");
        store.close_tab("ghost", "tab-1");
        assert!(store.new_tab("ghost", None).is_none());
        assert!(!store.can_go_back("ghost"));
        assert!(store.instance("ghost").is_none());
    }

    #[test]
    fn test_destroy_instance() {
        let mut store = store_with("w");
        store.destroy_instance("w");
        assert!(store.instance("w").is_none());
        store.init_instance("w", None);
        assert_eq!(store.instance("w").unwrap().tabs.len(), 1);
    }

    #[test]
    fn test_tab_ids_unique_across_instances() {
        let mut store = BrowserStore::new();
        store.init_instance("a", None);
        store.init_instance("b", None);
        assert_ne!(
            store.active_tab("a").unwrap().id,
            store.active_tab("b").unwrap().id
        );
    }
}
