//! Asterix browser engine
//!
//! The in-app browser is a routing engine, not an iframe wrapper. Address-bar
//! input is classified into exactly one [`ResolvedRoute`] and every browser
//! window keeps its own tabs and history in the [`BrowserStore`].
//!
//! Resolution priority (first match wins):
//!
//! 1. Empty / `about:` aliases → new tab
//! 2. Leading `/` → internal route, repository view, or not found
//! 3. `github.com/<owner>/<repo>` for a known repository → repository view
//! 4. `http(s)://` → trusted demo when the host is in the registry, else external
//! 5. Demo registry key → trusted demo
//! 6. Exact repository name → repository view
//! 7. Repository name prefix → repository view
//! 8. Anything else → external `https://<input>`
//!
//! Browser state is deliberately kept apart from window state: the store is
//! keyed by window id and knows nothing about geometry or focus.

mod registry;
mod resolver;
mod route;
mod store;
mod tab;

pub use registry::{
    demo_by_host, demo_by_key, internal_route, DemoEntry, InternalApp, DEMO_REGISTRY,
    INTERNAL_ROUTES,
};
pub use resolver::{resolve_url, resolve_url_for_owner};
pub use route::{ResolvedRoute, RouteKind};
pub use store::BrowserStore;
pub use tab::{BrowserInstance, BrowserTab, TabId};

/// URL of an empty tab
pub const NEW_TAB_URL: &str = "about:newtab";

/// Title of an empty tab
pub const NEW_TAB_TITLE: &str = "New Tab";
