//! Repository catalog operations
//!
//! The list is replaced wholesale on every refresh. Provider failures stop
//! here: they become an empty list or empty details plus a notification.

use asterix_hal::Platform;
use asterix_vfs::{
    find_repository, visible_repositories, CommitInfo, LanguageBreakdown, Repository,
    RepositorySource, SourceError,
};
use serde::Serialize;

use super::Kernel;
use crate::notify::Severity;

/// Commits fetched for the project viewer
pub const COMMIT_LIMIT: usize = 10;

/// On-demand details of one repository
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryDetails {
    pub readme: Option<String>,
    pub commits: Vec<CommitInfo>,
    pub languages: LanguageBreakdown,
}

impl<P: Platform> Kernel<P> {
    /// Current repository list
    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    /// Whether a refresh is in flight
    pub fn repos_loading(&self) -> bool {
        self.repos_loading
    }

    /// Repositories filtered and sorted by the current settings
    pub fn visible_repositories(&self) -> Vec<&Repository> {
        visible_repositories(&self.repos, &self.settings.repo_filter())
    }

    /// Find a repository by name, ignoring case
    pub fn find_repository(&self, name: &str) -> Option<&Repository> {
        find_repository(&self.repos, name)
    }

    /// Mark a refresh as started. The host performs the fetch and hands the
    /// result to [`complete_refresh`](Self::complete_refresh).
    pub fn begin_refresh(&mut self) {
        self.repos_loading = true;
        self.notify("Refreshing repositories…", Severity::Info);
    }

    /// Swap in the result of a fetch. Returns the new repository count.
    pub fn complete_refresh(&mut self, result: Result<Vec<Repository>, SourceError>) -> usize {
        self.repos_loading = false;
        match result {
            Ok(repos) => {
                self.repos = repos;
                self.hal
                    .debug_write(&format!("[repos] loaded {} repositories", self.repos.len()));
                self.notify(
                    format!("Loaded {} repositories", self.repos.len()),
                    Severity::Success,
                );
            }
            Err(e) => {
                self.repos = Vec::new();
                self.hal.debug_write(&format!("[repos] refresh failed: {}", e));
                self.notify(format!("Failed to load repositories: {}", e), Severity::Error);
            }
        }
        self.repos.len()
    }

    /// Fetch the list from `source` synchronously and swap it in
    pub fn refresh_repositories<S: RepositorySource + ?Sized>(&mut self, source: &S) -> usize {
        self.begin_refresh();
        let result = source.list_repositories(&self.config.owner);
        self.complete_refresh(result)
    }

    /// README, recent commits and languages of one repository.
    ///
    /// Each lookup degrades to its empty value on failure; a missing README
    /// is not an error.
    pub fn repository_details<S: RepositorySource + ?Sized>(
        &self,
        source: &S,
        name: &str,
    ) -> RepositoryDetails {
        let owner = &self.config.owner;
        RepositoryDetails {
            readme: match source.readme(owner, name) {
                Ok(readme) => readme,
                Err(e) if e.is_not_found() => None,
                Err(e) => self.degrade(name, "readme", e),
            },
            commits: source
                .commits(owner, name, COMMIT_LIMIT)
                .unwrap_or_else(|e| self.degrade(name, "commits", e)),
            languages: source
                .languages(owner, name)
                .unwrap_or_else(|e| self.degrade(name, "languages", e)),
        }
    }

    fn degrade<T: Default>(&self, repo: &str, what: &str, e: SourceError) -> T {
        self.hal
            .debug_write(&format!("[repos] {} for {} unavailable: {}", what, repo, e));
        T::default()
    }
}
