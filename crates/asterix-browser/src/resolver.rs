//! Address-bar input classification.
//!
//! Total and pure: the same input and repository list always give the same
//! route, and no input makes it fail.

use asterix_vfs::{compare_names, find_repository, Repository, OWNER};
use url::Url;

use crate::registry::{demo_by_host, demo_by_key, internal_route};
use crate::route::ResolvedRoute;

const NEW_TAB_ALIASES: [&str; 3] = ["about:blank", "about:newtab", "about:home"];

/// Resolve input for the default account.
pub fn resolve_url(input: &str, repos: &[Repository]) -> ResolvedRoute {
    resolve_url_for_owner(input, OWNER, repos)
}

/// Resolve input, treating `github.com/<owner>/...` links as local repositories.
pub fn resolve_url_for_owner(input: &str, owner: &str, repos: &[Repository]) -> ResolvedRoute {
    let raw = input.trim();

    if raw.is_empty() || NEW_TAB_ALIASES.contains(&raw) {
        return ResolvedRoute::NewTab;
    }

    if raw.starts_with('/') {
        return resolve_internal(raw, repos);
    }

    if let Some(name) = github_repo_segment(raw, owner) {
        if let Some(repo) = find_repository(repos, name) {
            return repository(repo);
        }
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return resolve_web(raw);
    }

    let key: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if let Some(entry) = demo_by_key(&key) {
        return ResolvedRoute::Demo {
            key: entry.key.to_string(),
            demo_url: entry.url.to_string(),
        };
    }

    if let Some(repo) = find_repository(repos, raw) {
        return repository(repo);
    }

    if let Some(repo) = find_prefix(repos, raw) {
        return repository(repo);
    }

    ResolvedRoute::External {
        external_url: format!("https://{}", raw),
        title: raw.to_string(),
    }
}

fn resolve_internal(raw: &str, repos: &[Repository]) -> ResolvedRoute {
    let clean = match raw.strip_suffix('/') {
        Some("") | None => raw,
        Some(stripped) => stripped,
    };

    if let Some(rest) = strip_prefix_ignore_case(clean, "/projects/") {
        let name = leading_segment(rest, &['/', '?']);
        if !name.is_empty() {
            return match find_repository(repos, name) {
                Some(repo) => repository(repo),
                None => not_found(clean),
            };
        }
    }

    match internal_route(clean) {
        Some(app) => ResolvedRoute::Internal {
            app,
            display_url: clean.to_string(),
        },
        None => not_found(clean),
    }
}

fn resolve_web(raw: &str) -> ResolvedRoute {
    let Ok(url) = Url::parse(raw) else {
        // malformed, open it externally as typed
        return ResolvedRoute::External {
            external_url: raw.to_string(),
            title: raw.to_string(),
        };
    };

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    if let Some(entry) = demo_by_host(&host) {
        return ResolvedRoute::Demo {
            key: entry.key.to_string(),
            demo_url: raw.to_string(),
        };
    }

    ResolvedRoute::External {
        external_url: raw.to_string(),
        title: url.host_str().unwrap_or(raw).to_string(),
    }
}

/// Extract `<repo>` from `[http(s)://]github.com/<owner>/<repo>...`
fn github_repo_segment<'a>(raw: &'a str, owner: &str) -> Option<&'a str> {
    let rest = strip_prefix_ignore_case(raw, "https://")
        .or_else(|| strip_prefix_ignore_case(raw, "http://"))
        .unwrap_or(raw);
    let rest = strip_prefix_ignore_case(rest, "github.com/")?;
    let rest = strip_prefix_ignore_case(rest, owner)?;
    let rest = rest.strip_prefix('/')?;
    let name = leading_segment(rest, &['/', '?', '#']);
    (!name.is_empty()).then_some(name)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Text up to the first stop character or whitespace
fn leading_segment<'a>(s: &'a str, stops: &[char]) -> &'a str {
    let end = s
        .find(|c: char| stops.contains(&c) || c.is_whitespace())
        .unwrap_or(s.len());
    &s[..end]
}

/// Prefix match, pinned to the alphabetically first candidate so the result
/// does not depend on provider ordering.
fn find_prefix<'a>(repos: &'a [Repository], prefix: &str) -> Option<&'a Repository> {
    let wanted = prefix.to_lowercase();
    repos
        .iter()
        .filter(|r| r.name.to_lowercase().starts_with(&wanted))
        .min_by(|a, b| compare_names(&a.name, &b.name))
}

fn repository(repo: &Repository) -> ResolvedRoute {
    ResolvedRoute::Repository {
        repo_name: repo.name.clone(),
    }
}

fn not_found(path: &str) -> ResolvedRoute {
    ResolvedRoute::NotFound {
        display_url: path.to_string(),
    }
}
