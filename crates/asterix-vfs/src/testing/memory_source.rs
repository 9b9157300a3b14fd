//! In-memory repository source.
//!
//! Serves a fixed repository list and per-repository details, or fails every
//! call with a configured error. Used by unit tests and demos.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::core::SourceError;
use crate::source::{CommitInfo, LanguageBreakdown, Repository, RepositorySource};

/// In-memory [`RepositorySource`]
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    repositories: Vec<Repository>,
    readmes: BTreeMap<String, String>,
    commits: BTreeMap<String, Vec<CommitInfo>>,
    languages: BTreeMap<String, LanguageBreakdown>,
    failure: Option<SourceError>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Source serving the given repositories
    pub fn with_repositories(repositories: Vec<Repository>) -> Self {
        Self {
            repositories,
            ..Self::default()
        }
    }

    /// Source whose every call fails with `error`
    pub fn failing(error: SourceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Attach a README to a repository
    pub fn add_readme(&mut self, repo: &str, text: &str) {
        self.readmes.insert(String::from(repo), String::from(text));
    }

    /// Attach recent commits to a repository
    pub fn add_commits(&mut self, repo: &str, commits: Vec<CommitInfo>) {
        self.commits.insert(String::from(repo), commits);
    }

    /// Attach a language breakdown to a repository
    pub fn add_languages(&mut self, repo: &str, languages: LanguageBreakdown) {
        self.languages.insert(String::from(repo), languages);
    }

    fn check(&self) -> Result<(), SourceError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn knows(&self, repo: &str) -> Result<(), SourceError> {
        if self.repositories.iter().any(|r| r.name == repo) {
            Ok(())
        } else {
            Err(SourceError::status(404, "Not Found"))
        }
    }
}

impl RepositorySource for MemorySource {
    fn list_repositories(&self, _owner: &str) -> Result<Vec<Repository>, SourceError> {
        self.check()?;
        Ok(self.repositories.clone())
    }

    fn readme(&self, _owner: &str, repo: &str) -> Result<Option<String>, SourceError> {
        self.check()?;
        self.knows(repo)?;
        Ok(self.readmes.get(repo).cloned())
    }

    fn commits(&self, _owner: &str, repo: &str, limit: usize) -> Result<Vec<CommitInfo>, SourceError> {
        self.check()?;
        self.knows(repo)?;
        Ok(self
            .commits
            .get(repo)
            .map(|c| c.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn languages(&self, _owner: &str, repo: &str) -> Result<LanguageBreakdown, SourceError> {
        self.check()?;
        self.knows(repo)?;
        Ok(self.languages.get(repo).cloned().unwrap_or_default())
    }
}
