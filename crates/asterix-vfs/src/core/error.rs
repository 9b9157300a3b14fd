//! Error types for repository data sources.
//!
//! Path and URL resolution never fail; the only fallible seam in this crate
//! is the external data provider behind [`crate::RepositorySource`].

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Errors from a repository data provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceError {
    /// Provider could not be reached
    Unavailable,

    /// Provider answered with a non-success status
    Status {
        /// HTTP status code
        code: u16,
        /// Status text, if the provider gave one
        reason: Option<String>,
    },

    /// Rate limit exhausted
    RateLimited,

    /// Response body could not be decoded
    Malformed(String),
}

impl SourceError {
    /// Create a status error.
    pub fn status(code: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            code,
            reason: Some(reason.into()),
        }
    }

    /// Create a decode error with message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Check if this is a "not found" answer.
    ///
    /// A missing README or repository is an ordinary outcome, not a failure
    /// worth notifying about.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::Status { code: 404, .. })
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable => write!(f, "repository provider unavailable"),
            SourceError::Status {
                code,
                reason: Some(reason),
            } => write!(f, "provider returned {} {}", code, reason),
            SourceError::Status { code, reason: None } => write!(f, "provider returned {}", code),
            SourceError::RateLimited => write!(f, "provider rate limit exceeded"),
            SourceError::Malformed(msg) => write!(f, "malformed provider response: {}", msg),
        }
    }
}
