//! Static VFS tree and path resolution.
//!
//! The tree is rebuilt on every query. `/projects` has no stored children;
//! its launchers are generated from the repository list passed in.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::core::{join_path, AppKind, LaunchPayload, VfsNode};
use crate::source::{find_repository, Repository};
use crate::{HOME_DIR, PROJECTS_DIR};

/// Build the static part of the tree.
pub fn static_root() -> VfsNode {
    VfsNode::dir(
        "/",
        "/",
        "Root filesystem",
        vec![
            VfsNode::dir(
                "home",
                "/home",
                "User home directory",
                vec![VfsNode::dir(
                    "dev-asterix",
                    HOME_DIR,
                    "Home directory for dev-asterix",
                    vec![VfsNode::link(
                        "projects",
                        "/home/dev-asterix/projects",
                        "Shortcut to the repository tree",
                        PROJECTS_DIR,
                    )],
                )],
            ),
            VfsNode::dir("projects", PROJECTS_DIR, "GitHub repositories (dynamic)", Vec::new()),
            VfsNode::app(
                "settings",
                "/settings",
                "Personalization & Settings",
                AppKind::Settings,
                "Personalization",
                LaunchPayload::None,
            ),
            VfsNode::app(
                "system",
                "/system",
                "System Properties",
                AppKind::Properties,
                "Properties",
                LaunchPayload::None,
            ),
            VfsNode::dir(
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
            ),
        ],
    )
}

/// Launcher node for one repository.
pub fn project_node(repo_name: &str) -> VfsNode {
    let path = join_path(PROJECTS_DIR, repo_name);
    VfsNode::app(
        repo_name,
        &path,
        &format!("Repository: {}", repo_name),
        AppKind::ProjectViewer,
        &format!("{} — project", repo_name),
        LaunchPayload::repository(repo_name),
    )
}

fn projects_dir(repos: &[Repository]) -> VfsNode {
    VfsNode::dir(
        "projects",
        PROJECTS_DIR,
        "GitHub Repositories",
        project_nodes(repos),
    )
}

fn project_nodes(repos: &[Repository]) -> Vec<VfsNode> {
    repos.iter().map(|r| project_node(&r.name)).collect()
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve a path to a node.
///
/// `/projects` yields a directory with one launcher per repository (names
/// keep the repository's casing); `/projects/<name>` matches the repository
/// case-insensitively. Everything else walks the static tree comparing
/// segments case-sensitively. Returns `None` for any missing segment.
pub fn resolve_path(path: &str, repos: &[Repository]) -> Option<VfsNode> {
    let segs = segments(path);

    if segs.first() == Some(&"projects") {
        return match segs.as_slice() {
            [_] => Some(projects_dir(repos)),
            [_, name] => find_repository(repos, name).map(|r| project_node(&r.name)),
            _ => None,
        };
    }

    let mut node = static_root();
    for seg in segs {
        let child = match node.kind {
            crate::core::NodeKind::Dir { children } => {
                children.into_iter().find(|c| c.name == seg)
            }
            _ => None,
        };
        node = child?;
    }
    Some(node)
}

/// List the children of a path.
///
/// Empty when the node does not exist or has no children; `/projects` lists
/// the repository launchers.
pub fn vfs_children(path: &str, repos: &[Repository]) -> Vec<VfsNode> {
    match resolve_path(path, repos) {
        Some(node) => match node.kind {
            crate::core::NodeKind::Dir { children } => children,
            _ => Vec::new(),
        },
        None => Vec::new(),
    }
}

/// Names of the children of a path, in tree order.
pub fn child_names(path: &str, repos: &[Repository]) -> Vec<String> {
    vfs_children(path, repos).into_iter().map(|n| n.name).collect()
}
