//! Static routing tables: trusted demo hosts and internal OS paths

use serde::{Deserialize, Serialize};

/// A trusted demo site that may be embedded instead of opened externally
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoEntry {
    /// Registry key, also the tab title
    pub key: &'static str,
    /// Landing URL
    pub url: &'static str,
    /// Host (with port, if any) matched against navigations
    pub host: &'static str,
}

/// Trusted demo domains; only these are embedded
///
/// Keys are matched before repository names, so they must not shadow one.
pub const DEMO_REGISTRY: &[DemoEntry] = &[
    DemoEntry {
        key: "portfolio",
        url: "https://astrx.dev",
        host: "astrx.dev",
    },
    DemoEntry {
        key: "drawdown",
        url: "https://drawdown.astrx.dev",
        host: "drawdown.astrx.dev",
    },
    DemoEntry {
        key: "pgstudio-live",
        url: "https://pgstudio.astrx.dev",
        host: "pgstudio.astrx.dev",
    },
    DemoEntry {
        key: "personal_portfolio",
        url: "https://me.astrx.dev",
        host: "me.astrx.dev",
    },
];

/// Built-in application rendered inside the browser
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternalApp {
    Home,
    Settings,
    Monitor,
    Computer,
    Repos,
}

impl InternalApp {
    /// Route key, also the tab title
    pub fn as_str(&self) -> &'static str {
        match self {
            InternalApp::Home => "home",
            InternalApp::Settings => "settings",
            InternalApp::Monitor => "monitor",
            InternalApp::Computer => "computer",
            InternalApp::Repos => "repos",
        }
    }
}

/// Known internal paths
pub const INTERNAL_ROUTES: &[(&str, InternalApp)] = &[
    ("/", InternalApp::Home),
    ("/home", InternalApp::Home),
    ("/settings", InternalApp::Settings),
    ("/monitor", InternalApp::Monitor),
    ("/activity", InternalApp::Monitor),
    ("/computer", InternalApp::Computer),
    ("/projects", InternalApp::Repos),
    ("/repos", InternalApp::Repos),
];

/// Look up an exact internal path
pub fn internal_route(path: &str) -> Option<InternalApp> {
    INTERNAL_ROUTES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, app)| *app)
}

/// Look up a registry entry by key
pub fn demo_by_key(key: &str) -> Option<&'static DemoEntry> {
    DEMO_REGISTRY.iter().find(|e| e.key == key)
}

/// Look up a registry entry by host
pub fn demo_by_host(host: &str) -> Option<&'static DemoEntry> {
    DEMO_REGISTRY.iter().find(|e| e.host == host)
}
