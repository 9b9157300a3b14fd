//! Core VFS types and utilities

mod error;
mod path;
mod types;

pub use error::SourceError;
pub use path::{display_path, join_path, normalize_path};
pub use types::{AppKind, LaunchPayload, NodeKind, VfsNode};
