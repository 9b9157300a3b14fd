//! Repository records and the data-provider seam.
//!
//! The provider is an external collaborator (GitHub REST in production). The
//! core only ever sees a full list that it swaps wholesale on refresh, plus
//! on-demand detail lookups keyed by repository name.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

use crate::core::SourceError;

/// A repository as reported by the provider.
///
/// Field names follow the GitHub REST representation so provider payloads
/// deserialize directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub watchers_count: u32,
    pub topics: Vec<String>,
    pub fork: bool,
    pub archived: bool,
    pub size: u64,
    pub default_branch: String,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
}

impl Repository {
    /// Minimal record with just a name
    pub fn named(name: &str) -> Self {
        Self {
            name: String::from(name),
            html_url: alloc::format!("https://github.com/{}/{}", crate::OWNER, name),
            default_branch: String::from("main"),
            ..Default::default()
        }
    }
}

/// One commit from a repository's recent history
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub html_url: String,
}

/// Bytes of source per language
pub type LanguageBreakdown = BTreeMap<String, u64>;

/// Repository data provider.
///
/// Implementations report failures as [`SourceError`]; callers in the kernel
/// convert them to empty results before they reach any store.
pub trait RepositorySource {
    /// All repositories of an owner
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>, SourceError>;

    /// Raw README text, `None` when the repository has no README
    fn readme(&self, owner: &str, repo: &str) -> Result<Option<String>, SourceError>;

    /// Most recent commits, newest first
    fn commits(&self, owner: &str, repo: &str, limit: usize) -> Result<Vec<CommitInfo>, SourceError>;

    /// Language byte counts
    fn languages(&self, owner: &str, repo: &str) -> Result<LanguageBreakdown, SourceError>;
}

/// Ordering applied to repository listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Most recently updated first
    #[default]
    LastUpdated,
    /// Most starred first
    Stars,
    /// Alphabetical, case-insensitive
    Name,
}

/// Which repositories a listing shows, and in what order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepoFilter {
    pub show_archived: bool,
    pub show_forked: bool,
    pub sort: SortMode,
}

/// Apply a filter to a repository list.
pub fn visible_repositories<'a>(repos: &'a [Repository], filter: &RepoFilter) -> Vec<&'a Repository> {
    let mut visible: Vec<&Repository> = repos
        .iter()
        .filter(|r| filter.show_forked || !r.fork)
        .filter(|r| filter.show_archived || !r.archived)
        .collect();

    visible.sort_by(|a, b| match filter.sort {
        SortMode::Stars => b.stargazers_count.cmp(&a.stargazers_count),
        SortMode::Name => compare_names(&a.name, &b.name),
        // ISO-8601 timestamps order lexically
        SortMode::LastUpdated => b.updated_at.cmp(&a.updated_at),
    });
    visible
}

/// Repository names are compared with full Unicode lowercasing.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// First repository whose name matches `name`, ignoring case
pub fn find_repository<'a>(repos: &'a [Repository], name: &str) -> Option<&'a Repository> {
    repos.iter().find(|r| names_match(&r.name, name))
}

/// Case-insensitive name ordering with the exact name as tie-break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
