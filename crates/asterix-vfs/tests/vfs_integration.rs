//! Integration tests for the virtual filesystem
//!
//! Covers path normalization, tree resolution against a repository list and
//! the repository source contract.

use asterix_vfs::{
    child_names, normalize_path, resolve_path, visible_repositories, AppKind, LaunchPayload,
    MemorySource, NodeKind, RepoFilter, Repository, RepositorySource, SortMode, SourceError,
    HOME_DIR, OWNER,
};

fn repos() -> Vec<Repository> {
    let mut old = Repository::named("Portfolio");
    old.updated_at = "2024-01-01T00:00:00Z".into();
    let mut new = Repository::named("PgStudio");
    new.updated_at = "2025-06-01T00:00:00Z".into();
    let mut fork = Repository::named("forked-lib");
    fork.fork = true;
    vec![old, new, fork]
}

// =============================================================================
// Path normalization
// =============================================================================

#[test]
fn test_normalize_is_a_fixed_point() {
    let cwds = ["/", HOME_DIR, "/projects", "~", "/var/log"];
    let inputs = [
        "",
        "~",
        "~/projects",
        ".",
        "..",
        "../..",
        "/",
        "//projects//PgStudio/",
        "/a/./b/../c",
        "relative/dir/",
        "~nothome",
        "/../../etc",
    ];
    for cwd in cwds {
        for input in inputs {
            let once = normalize_path(input, cwd);
            let twice = normalize_path(&once, cwd);
            assert_eq!(once, twice, "input {:?} cwd {:?}", input, cwd);
            assert!(once.starts_with('/'));
        }
    }
}

#[test]
fn test_normalize_relative_and_home() {
    assert_eq!(normalize_path("..", HOME_DIR), "/home");
    assert_eq!(normalize_path("~/projects", "/"), "/home/dev-asterix/projects");
    assert_eq!(normalize_path("log", "/var"), "/var/log");
    assert_eq!(normalize_path("../../..", "/var"), "/");
}

// =============================================================================
// Tree
// =============================================================================

#[test]
fn test_walk_tree_from_root() {
    let repos = repos();
    assert_eq!(
        child_names("/", &repos),
        vec!["home", "projects", "settings", "system", "var"]
    );
    assert_eq!(
        child_names("/projects", &repos),
        vec!["Portfolio", "PgStudio", "forked-lib"]
    );
    assert!(child_names("/projects/PgStudio", &repos).is_empty());
    assert!(child_names("/nowhere", &repos).is_empty());
}

#[test]
fn test_project_lookup_is_case_insensitive() {
    let node = resolve_path("/projects/pgstudio", &repos()).unwrap();
    assert_eq!(node.name, "PgStudio");
    match node.kind {
        NodeKind::App {
            app,
            title,
            payload,
        } => {
            assert_eq!(app, AppKind::ProjectViewer);
            assert_eq!(title, "PgStudio — project");
            assert_eq!(payload, LaunchPayload::repository("PgStudio"));
        }
        other => panic!("expected launcher, got {:?}", other),
    }
}

#[test]
fn test_project_lookup_folds_unicode_case() {
    let repos = vec![Repository::named("Über")];
    let node = resolve_path("/projects/über", &repos).unwrap();
    assert_eq!(node.name, "Über");
    assert_eq!(node.path, "/projects/Über");
}

#[test]
fn test_static_segments_are_case_sensitive() {
    assert!(resolve_path("/var/log", &[]).is_some());
    assert!(resolve_path("/VAR/log", &[]).is_none());
    assert!(resolve_path("/settings/extra", &[]).is_none());
}

#[test]
fn test_home_projects_is_a_link() {
    let node = resolve_path("/home/dev-asterix/projects", &[]).unwrap();
    assert_eq!(
        node.kind,
        NodeKind::Link {
            target: "/projects".into()
        }
    );
}

// =============================================================================
// Repository source
// =============================================================================

#[test]
fn test_filter_and_sort() {
    let repos = repos();
    let visible = visible_repositories(&repos, &RepoFilter::default());
    let names: Vec<&str> = visible.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["PgStudio", "Portfolio"]);

    let filter = RepoFilter {
        show_forked: true,
        sort: SortMode::Name,
        ..RepoFilter::default()
    };
    let names: Vec<&str> = visible_repositories(&repos, &filter)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["forked-lib", "PgStudio", "Portfolio"]);
}

#[test]
fn test_memory_source_contract() {
    let mut source = MemorySource::with_repositories(repos());
    source.add_readme("PgStudio", "# PgStudio");

    assert_eq!(source.list_repositories(OWNER).unwrap().len(), 3);
    assert_eq!(
        source.readme(OWNER, "PgStudio").unwrap().as_deref(),
        Some("# PgStudio")
    );
    assert_eq!(source.readme(OWNER, "Portfolio").unwrap(), None);
    assert!(source.readme(OWNER, "Missing").unwrap_err().is_not_found());

    let failing = MemorySource::failing(SourceError::status(500, "Internal Server Error"));
    let err = failing.list_repositories(OWNER).unwrap_err();
    assert!(!err.is_not_found());
}
