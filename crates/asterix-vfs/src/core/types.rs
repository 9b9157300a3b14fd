//! VFS node and application types.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Kind of application a window (and a launcher node) runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    Terminal,
    FileExplorer,
    Settings,
    Properties,
    Browser,
    ProjectViewer,
    Preview,
    DocumentViewer,
    Notepad,
    ImageViewer,
    ActivityMonitor,
    Links,
    Status,
}

impl AppKind {
    /// Every application kind, in launcher order
    pub const ALL: [AppKind; 13] = [
        AppKind::Terminal,
        AppKind::FileExplorer,
        AppKind::Settings,
        AppKind::Properties,
        AppKind::Browser,
        AppKind::ProjectViewer,
        AppKind::Preview,
        AppKind::DocumentViewer,
        AppKind::Notepad,
        AppKind::ImageViewer,
        AppKind::ActivityMonitor,
        AppKind::Links,
        AppKind::Status,
    ];

    /// Canonical tag, also used as the window id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            AppKind::Terminal => "terminal",
            AppKind::FileExplorer => "file-explorer",
            AppKind::Settings => "settings",
            AppKind::Properties => "properties",
            AppKind::Browser => "browser",
            AppKind::ProjectViewer => "project-viewer",
            AppKind::Preview => "preview",
            AppKind::DocumentViewer => "document-viewer",
            AppKind::Notepad => "notepad",
            AppKind::ImageViewer => "image-viewer",
            AppKind::ActivityMonitor => "activity-monitor",
            AppKind::Links => "links",
            AppKind::Status => "status",
        }
    }

    /// Parse a tag. Accepts the canonical tags and the short aliases used by
    /// desktop icons (`computer`, `project`, `viewer`, `imageviewer`, `monitor`).
    pub fn parse(tag: &str) -> Option<AppKind> {
        let kind = match tag {
            "computer" => AppKind::FileExplorer,
            "project" => AppKind::ProjectViewer,
            "viewer" => AppKind::DocumentViewer,
            "imageviewer" => AppKind::ImageViewer,
            "monitor" => AppKind::ActivityMonitor,
            other => return AppKind::ALL.into_iter().find(|k| k.as_str() == other),
        };
        Some(kind)
    }

    /// Title a window of this kind gets when the caller supplies none
    pub fn default_title(&self, payload: &LaunchPayload) -> String {
        match (self, payload) {
            (AppKind::Terminal, _) => "terminal — dev-asterix".to_string(),
            (AppKind::FileExplorer, _) => "My Computer".to_string(),
            (AppKind::Settings, _) => "Personalization".to_string(),
            (AppKind::Properties, _) => "Properties".to_string(),
            (AppKind::Links, _) => "Quick Links".to_string(),
            (AppKind::Status, _) => "Status".to_string(),
            (AppKind::Browser, _) => "Browser".to_string(),
            (AppKind::ProjectViewer, LaunchPayload::Repository { repo_name }) => {
                format!("{} — project", repo_name)
            }
            (AppKind::ProjectViewer, _) => "Project".to_string(),
            (AppKind::Preview, LaunchPayload::Preview { title, .. }) => title.clone(),
            (AppKind::Preview, _) => "Preview".to_string(),
            (AppKind::DocumentViewer, LaunchPayload::Document { file_name, .. }) => {
                file_name.clone()
            }
            (AppKind::DocumentViewer, _) => "Viewer".to_string(),
            (AppKind::Notepad, _) => "Notepad".to_string(),
            (AppKind::ImageViewer, LaunchPayload::Image { alt: Some(alt), .. }) => alt.clone(),
            (AppKind::ImageViewer, _) => "Image Viewer".to_string(),
            (AppKind::ActivityMonitor, _) => "Activity Monitor".to_string(),
        }
    }
}

/// Kind-specific data handed to the window that renders an application.
///
/// Opaque to the window store; only the rendering layer interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LaunchPayload {
    #[default]
    None,
    Repository {
        repo_name: String,
    },
    Url {
        url: String,
    },
    Document {
        file_name: String,
        path: Option<String>,
    },
    Image {
        src: String,
        alt: Option<String>,
    },
    Preview {
        title: String,
        url: String,
    },
}

impl LaunchPayload {
    /// Payload naming a repository
    pub fn repository(name: impl Into<String>) -> Self {
        Self::Repository {
            repo_name: name.into(),
        }
    }

    /// Payload carrying a URL
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Repository named by this payload, if any
    pub fn repo_name(&self) -> Option<&str> {
        match self {
            Self::Repository { repo_name } => Some(repo_name),
            _ => None,
        }
    }

    /// URL carried by this payload, if any
    pub fn url_str(&self) -> Option<&str> {
        match self {
            Self::Url { url } | Self::Preview { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// What a VFS node is and what opening it does
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    /// Directory, navigable with `cd`
    Dir { children: Vec<VfsNode> },
    /// Application launcher: opening it opens a window
    App {
        app: AppKind,
        title: String,
        payload: LaunchPayload,
    },
    /// Symbolic link to another absolute path
    Link { target: String },
}

/// A node of the virtual filesystem
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VfsNode {
    /// Last path component (`/` for the root)
    pub name: String,
    /// Canonical absolute path
    pub path: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Node kind with its kind-specific data
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl VfsNode {
    /// Create a directory node
    pub fn dir(name: &str, path: &str, description: &str, children: Vec<VfsNode>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            description: Some(description.to_string()),
            kind: NodeKind::Dir { children },
        }
    }

    /// Create an application launcher node
    pub fn app(
        name: &str,
        path: &str,
        description: &str,
        app: AppKind,
        title: &str,
        payload: LaunchPayload,
    ) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            description: Some(description.to_string()),
            kind: NodeKind::App {
                app,
                title: title.to_string(),
                payload,
            },
        }
    }

    /// Create a symbolic link node
    pub fn link(name: &str, path: &str, description: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            description: Some(description.to_string()),
            kind: NodeKind::Link {
                target: target.to_string(),
            },
        }
    }

    /// Check if this node is a directory
    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir { .. })
    }

    /// Children of a directory (empty for launchers and links)
    pub fn children(&self) -> &[VfsNode] {
        match &self.kind {
            NodeKind::Dir { children } => children,
            _ => &[],
        }
    }

    /// Short type label used by `ls`
    pub fn type_label(&self) -> &'static str {
        match self.kind {
            NodeKind::Dir { .. } => "dir",
            NodeKind::App { .. } => "app",
            NodeKind::Link { .. } => "link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_app_kind_tags_roundtrip() {
        for kind in AppKind::ALL {
            assert_eq!(AppKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AppKind::parse("computer"), Some(AppKind::FileExplorer));
        assert_eq!(AppKind::parse("monitor"), Some(AppKind::ActivityMonitor));
        assert_eq!(AppKind::parse("calculator"), None);
    }

    #[test]
    fn test_default_titles_use_payload() {
        assert_eq!(
            AppKind::ProjectViewer.default_title(&LaunchPayload::repository("PgStudio")),
            "PgStudio — project"
        );
        assert_eq!(AppKind::ProjectViewer.default_title(&LaunchPayload::None), "Project");
        assert_eq!(
            AppKind::ImageViewer.default_title(&LaunchPayload::Image {
                src: "/a.png".into(),
                alt: None,
            }),
            "Image Viewer"
        );
        assert_eq!(AppKind::Settings.default_title(&LaunchPayload::None), "Personalization");
    }

    #[test]
    fn test_node_serialization_shape() {
        let node = VfsNode::dir(
            "var",
            "/var",
            "Variable data",
            vec![VfsNode::app(
                "log",
                "/var/log",
                "Activity Monitor (process list)",
                AppKind::ActivityMonitor,
                "Activity Monitor",
                LaunchPayload::None,
            )],
        );
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "dir");
        assert_eq!(json["children"][0]["type"], "app");
        assert_eq!(json["children"][0]["app"], "activity-monitor");

        let back: VfsNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_children_of_non_dir_is_empty() {
        let link = VfsNode::link("projects", "/home/dev-asterix/projects", "", "/projects");
        assert!(link.children().is_empty());
        assert_eq!(link.type_label(), "link");
    }
}
