//! Resolved route: the classification of one address-bar input

use serde::{Deserialize, Serialize};

use crate::registry::InternalApp;
use crate::{NEW_TAB_TITLE, NEW_TAB_URL};

/// Where an input leads.
///
/// Every variant can produce a canonical display URL (stored in tab
/// history) and a short tab title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ResolvedRoute {
    /// Empty tab
    NewTab,
    /// Built-in application page
    Internal {
        app: InternalApp,
        display_url: String,
    },
    /// Repository view, with the repository's canonical casing
    Repository { repo_name: String },
    /// Trusted site embedded in the tab
    Demo { key: String, demo_url: String },
    /// Site that must open outside the shell
    External { external_url: String, title: String },
    /// Internal path or repository that does not exist
    NotFound { display_url: String },
}

/// Variant tag of a [`ResolvedRoute`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
    NewTab,
    Internal,
    Repository,
    Demo,
    External,
    NotFound,
}

impl ResolvedRoute {
    /// Variant tag
    pub fn kind(&self) -> RouteKind {
        match self {
            ResolvedRoute::NewTab => RouteKind::NewTab,
            ResolvedRoute::Internal { .. } => RouteKind::Internal,
            ResolvedRoute::Repository { .. } => RouteKind::Repository,
            ResolvedRoute::Demo { .. } => RouteKind::Demo,
            ResolvedRoute::External { .. } => RouteKind::External,
            ResolvedRoute::NotFound { .. } => RouteKind::NotFound,
        }
    }

    /// Canonical URL for the address bar and tab history
    pub fn display_url(&self) -> String {
        match self {
            ResolvedRoute::NewTab => NEW_TAB_URL.to_string(),
            ResolvedRoute::Internal { display_url, .. } => display_url.clone(),
            ResolvedRoute::Repository { repo_name } => format!("/projects/{}", repo_name),
            ResolvedRoute::Demo { demo_url, .. } => demo_url.clone(),
            ResolvedRoute::External { external_url, .. } => external_url.clone(),
            ResolvedRoute::NotFound { display_url } => display_url.clone(),
        }
    }

    /// Short tab title
    pub fn title(&self) -> String {
        match self {
            ResolvedRoute::NewTab => NEW_TAB_TITLE.to_string(),
            ResolvedRoute::Internal { app, .. } => app.as_str().to_string(),
            ResolvedRoute::Repository { repo_name } => repo_name.clone(),
            ResolvedRoute::Demo { key, .. } => key.clone(),
            ResolvedRoute::External { title, .. } => title.clone(),
            ResolvedRoute::NotFound { .. } => "Not Found".to_string(),
        }
    }

    /// Repository this route shows, if any
    pub fn repo_name(&self) -> Option<&str> {
        match self {
            ResolvedRoute::Repository { repo_name } => Some(repo_name),
            _ => None,
        }
    }
}
