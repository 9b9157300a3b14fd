//! Asterix OS Virtual Filesystem Layer
//!
//! The VFS layer gives the terminal, the file explorer and the kernel one
//! shared path model over a read-only view of a GitHub account:
//!
//! - **Types**: `AppKind`, `LaunchPayload`, `VfsNode` describing navigable paths
//! - **Path**: normalization (`~`, `.`, `..`, relative segments) and display
//! - **Tree**: the static tree plus the `/projects` subtree generated from
//!   the live repository list
//! - **Source**: repository records and the data-provider trait
//!
//! # Design Principles
//!
//! 1. **Pure resolution**: a query is a function of (path, repository list);
//!    no mutable VFS state exists and the tree is rebuilt on every call
//! 2. **Not-found is data**: lookups return `Option`, they never fail
//! 3. **Unix-like paths**: `/path/to/node` semantics with a home directory
//!
//! # Layout
//!
//! ```text
//! /
//! ├── home/
//! │   └── dev-asterix/
//! │       └── projects -> /projects
//! ├── projects/          (one launcher per repository)
//! ├── settings           (app)
//! ├── system             (app)
//! └── var/
//!     └── log            (app)
//! ```

#![no_std]
extern crate alloc;

pub mod core;
pub mod source;
pub mod testing;
pub mod tree;

// Convenient re-exports at crate root
pub use crate::core::{display_path, join_path, normalize_path};
pub use crate::core::{AppKind, LaunchPayload, NodeKind, SourceError, VfsNode};
pub use source::{
    compare_names, find_repository, names_match, visible_repositories, CommitInfo, LanguageBreakdown, RepoFilter, Repository,
    RepositorySource, SortMode,
};
pub use testing::MemorySource;
pub use tree::{child_names, project_node, resolve_path, static_root, vfs_children};

/// GitHub account the system presents
pub const OWNER: &str = "dev-asterix";

/// Home directory of the presented account
pub const HOME_DIR: &str = "/home/dev-asterix";

/// Root of the dynamic repository subtree
pub const PROJECTS_DIR: &str = "/projects";
