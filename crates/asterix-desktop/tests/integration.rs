//! Integration tests for the desktop kernel
//!
//! These tests verify full desktop workflows through the kernel facade:
//! - Window lifecycle, focus order and PID allocation
//! - Snap and maximize episodes
//! - Browser reuse from `open_url`
//! - Processes, notifications and settings persistence
//! - Terminal sessions against a loaded repository list

use asterix_desktop::kernel::SETTINGS_KEY;
use asterix_desktop::{
    Kernel, OpenOptions, OpenOutcome, Rect, Severity, SettingsPatch, Shell, SnapState,
};
use asterix_hal::Platform;
use asterix_hal_mock::MockPlatform;
use asterix_vfs::{AppKind, MemorySource, Repository, SortMode};

fn kernel() -> Kernel<MockPlatform> {
    Kernel::new(MockPlatform::with_time(1_000))
}

fn kernel_with_repos() -> Kernel<MockPlatform> {
    let mut kernel = kernel();
    kernel.complete_refresh(Ok(vec![
        Repository::named("PgStudio"),
        Repository::named("Foo"),
    ]));
    kernel
}

fn open(kernel: &mut Kernel<MockPlatform>, kind: AppKind, title: &str) -> String {
    kernel.open_app(
        kind,
        OpenOptions {
            title: Some(title.to_string()),
            ..Default::default()
        },
    )
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_pids_never_repeat() {
    let mut k = kernel();
    let mut seen = Vec::new();

    for round in 0..3 {
        for i in 0..4 {
            let id = open(&mut k, AppKind::Notepad, &format!("note {}-{}", round, i));
            seen.push(k.windows().get(&id).unwrap().pid);
        }
        let first = k.windows().windows()[0].id.clone();
        k.close_window(&first);
        k.close_all();
        assert_eq!(k.windows().count(), 0);
    }

    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seen.first(), Some(&1));
    assert_eq!(k.windows().next_pid(), 13);
}

#[test]
fn test_open_twice_focuses_existing() {
    let mut k = kernel();
    let settings = open(&mut k, AppKind::Settings, "Personalization");
    let other = open(&mut k, AppKind::Terminal, "terminal");
    let before = k.windows().next_pid();

    let again = open(&mut k, AppKind::Settings, "Personalization");
    assert_eq!(again, settings);
    assert_eq!(k.windows().count(), 2);
    assert_eq!(k.windows().next_pid(), before);
    assert_eq!(k.windows().focused(), Some(settings.as_str()));
    assert!(k.z_index(&settings) > k.z_index(&other));
}

#[test]
fn test_focus_raises_above_visible_windows() {
    let mut k = kernel();
    let ids: Vec<String> = (0..4)
        .map(|i| open(&mut k, AppKind::Notepad, &format!("n{}", i)))
        .collect();
    k.minimize_window(&ids[3]);

    for target in [&ids[0], &ids[2], &ids[1], &ids[3]] {
        k.focus_window(target);
        assert_eq!(k.windows().focus_order().last(), Some(target));
        for other in &ids {
            let window = k.windows().get(other).unwrap();
            if other != target && !window.minimized {
                assert!(k.z_index(target) > k.z_index(other));
            }
        }
    }
    assert!(!k.windows().get(&ids[3]).unwrap().minimized);
}

#[test]
fn test_minimize_hands_focus_back() {
    let mut k = kernel();
    let a = open(&mut k, AppKind::Notepad, "a");
    let b = open(&mut k, AppKind::Notepad, "b");
    let c = open(&mut k, AppKind::Notepad, "c");
    k.focus_window(&b);
    k.focus_window(&c);

    k.minimize_window(&c);
    assert_eq!(k.windows().focused(), Some(b.as_str()));
    assert!(!k.windows().focus_order().contains(&c));
    k.minimize_window(&b);
    assert_eq!(k.windows().focused(), Some(a.as_str()));
}

#[test]
fn test_cascade_skips_minimized() {
    let mut k = kernel();
    let a = open(&mut k, AppKind::Notepad, "a");
    let first = k.windows().get(&a).unwrap().position;
    k.minimize_window(&a);
    let b = open(&mut k, AppKind::Notepad, "b");
    assert_eq!(k.windows().get(&b).unwrap().position, first);
}

// =============================================================================
// Snap Tests
// =============================================================================

#[test]
fn test_snap_round_trip_restores_geometry() {
    let mut k = kernel();
    let id = open(&mut k, AppKind::Notepad, "notes");
    k.update_window_position(&id, 137.0, 91.0);
    k.update_window_size(&id, 640.0, 480.0);
    let before = k.window_frame(&id).unwrap();
    assert_eq!(before, Rect::new(137.0, 91.0, 640.0, 480.0));

    k.snap_window(&id, SnapState::Left);
    assert_eq!(k.window_frame(&id).unwrap(), Rect::new(0.0, 0.0, 960.0, 1032.0));
    k.snap_window(&id, SnapState::None);
    assert_eq!(k.window_frame(&id).unwrap(), before);
}

#[test]
fn test_snap_episode_keeps_first_geometry() {
    let mut k = kernel();
    let id = open(&mut k, AppKind::Notepad, "notes");
    k.update_window_position(&id, 50.0, 60.0);
    let before = k.window_frame(&id).unwrap();

    k.snap_window(&id, SnapState::Left);
    k.snap_window(&id, SnapState::Right);
    k.maximize_window(&id);
    assert_eq!(
        k.window_frame(&id).unwrap(),
        Rect::new(0.0, 0.0, 1920.0, 1032.0)
    );
    k.restore_window(&id);
    assert_eq!(k.window_frame(&id).unwrap(), before);
    assert_eq!(k.windows().get(&id).unwrap().snap, SnapState::None);
}

#[test]
fn test_drag_ends_snap_episode() {
    let mut k = kernel();
    let id = open(&mut k, AppKind::Notepad, "notes");
    k.snap_window(&id, SnapState::Right);
    k.update_window_position(&id, 300.0, 200.0);

    let window = k.windows().get(&id).unwrap();
    assert_eq!(window.snap, SnapState::None);
    assert!(window.saved.is_none());

    k.snap_window(&id, SnapState::None);
    assert_eq!(k.window_frame(&id).unwrap().position().x, 300.0);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut k = kernel();
    let id = open(&mut k, AppKind::Notepad, "notes");
    k.focus_window("ghost");
    k.minimize_window("ghost");
    k.snap_window("ghost", SnapState::Left);
    k.close_window("ghost");
    assert_eq!(k.windows().count(), 1);
    assert_eq!(k.windows().focused(), Some(id.as_str()));
    assert!(k.window_frame("ghost").is_none());
}

// =============================================================================
// Browser Tests
// =============================================================================

#[test]
fn test_open_url_reuses_browser_window() {
    let mut k = kernel_with_repos();
    k.open_url("pgstudio");
    let browser = k.windows().find_by_kind(AppKind::Browser).unwrap().id.clone();
    assert_eq!(k.windows().get(&browser).unwrap().title, "Asterix Browser");
    assert_eq!(k.browsers().active_tab(&browser).unwrap().title, "PgStudio");

    k.minimize_window(&browser);
    let route = k.open_url("/projects/foo");
    assert_eq!(route.repo_name(), Some("Foo"));

    assert_eq!(k.windows().count(), 1);
    assert!(!k.windows().get(&browser).unwrap().minimized);
    assert_eq!(k.windows().focused(), Some(browser.as_str()));
    let tab = k.browsers().active_tab(&browser).unwrap();
    assert_eq!(tab.history, vec!["/projects/PgStudio", "/projects/Foo"]);
}

#[test]
fn test_closing_browser_drops_tabs() {
    let mut k = kernel();
    k.open_url("https://example.com");
    let browser = k.windows().find_by_kind(AppKind::Browser).unwrap().id.clone();
    assert!(k.browsers().instance(&browser).is_some());

    k.close_window(&browser);
    assert!(k.browsers().instance(&browser).is_none());
}

#[test]
fn test_navigate_browser_tab() {
    let mut k = kernel_with_repos();
    k.open_url("");
    let browser = k.windows().find_by_kind(AppKind::Browser).unwrap().id.clone();
    k.navigate_browser(&browser, "/monitor");
    k.browsers_mut().go_back(&browser);
    assert_eq!(k.browsers().active_tab(&browser).unwrap().url, "about:newtab");
    assert!(k.browsers().can_go_forward(&browser));
}

// =============================================================================
// Process Tests
// =============================================================================

#[test]
fn test_kill_pid_notifies() {
    let mut k = kernel();
    open(&mut k, AppKind::Terminal, "terminal");
    open(&mut k, AppKind::Notepad, "Notepad");

    assert!(k.kill_pid(1));
    assert_eq!(k.windows().count(), 1);
    let note = k.notifications().latest().unwrap();
    assert_eq!(note.message, "Process PID 1 (\"terminal\") terminated");
    assert_eq!(note.severity, Severity::Warning);

    assert!(!k.kill_pid(1));
    let id = open(&mut k, AppKind::Terminal, "terminal");
    assert_eq!(k.windows().get(&id).unwrap().pid, 3);
}

#[test]
fn test_process_list_uptime() {
    let mut k = kernel();
    open(&mut k, AppKind::Notepad, "a");
    k.hal().advance_time(5_000);
    open(&mut k, AppKind::Notepad, "b");
    k.hal().advance_time(1_000);

    let rows = k.process_list();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].uptime_ms, 6_000);
    assert_eq!(rows[1].uptime_ms, 1_000);
    assert!(rows.iter().all(|r| r.memory_mb > 0));
}

// =============================================================================
// Notification Tests
// =============================================================================

#[test]
fn test_notifications_expire_on_tick() {
    let mut k = kernel();
    k.notify("first", Severity::Info);
    k.hal().advance_time(2_000);
    k.notify("second", Severity::Success);

    k.tick(1_000 + 4_500);
    let left: Vec<&str> = k
        .notifications()
        .entries()
        .iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(left, vec!["second"]);
}

#[test]
fn test_open_path_outcomes() {
    let mut k = kernel_with_repos();
    assert_eq!(
        k.open_path("/projects"),
        OpenOutcome::Directory("/projects".into())
    );
    assert_eq!(k.open_path("/nope"), OpenOutcome::NotFound);
    assert_eq!(
        k.notifications().latest().unwrap().message,
        "No such path: /nope"
    );

    let OpenOutcome::Opened(id) = k.open_path("/projects/pgstudio") else {
        panic!("expected a window");
    };
    assert_eq!(k.windows().get(&id).unwrap().title, "PgStudio — project");
}

// =============================================================================
// Settings Tests
// =============================================================================

#[test]
fn test_settings_survive_reboot() {
    let mut k = kernel();
    k.update_settings(SettingsPatch {
        theme: Some("amber".into()),
        sort_mode: Some(SortMode::Stars),
        ..Default::default()
    });
    let stored = k.hal().storage_get(SETTINGS_KEY).unwrap();

    let hal = MockPlatform::new();
    hal.seed_storage(SETTINGS_KEY, &stored);
    let rebooted = Kernel::new(hal);
    assert_eq!(rebooted.settings().theme, "amber");
    assert_eq!(rebooted.settings().sort_mode, SortMode::Stars);
    assert!(rebooted.windows().windows().is_empty());
}

#[test]
fn test_legacy_settings_are_migrated() {
    let hal = MockPlatform::new();
    hal.seed_storage(
        SETTINGS_KEY,
        r#"{"state":{"settings":{"theme":"matrix","showArchived":true}},"version":0}"#,
    );
    let k = Kernel::new(hal);
    assert_eq!(k.settings().theme, "matrix");
    assert!(k.settings().show_archived);
    assert!(k.hal().has_log_containing("migrating snapshot v0 -> v1"));
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let hal = MockPlatform::new();
    hal.seed_storage(SETTINGS_KEY, "not json");
    let k = Kernel::new(hal);
    assert_eq!(k.settings().theme, "carbon");
}

#[test]
fn test_unwritable_storage_warns() {
    let hal = MockPlatform::new();
    hal.set_storage_writable(false);
    let mut k = Kernel::new(hal);
    k.update_settings(SettingsPatch {
        compact_mode: Some(true),
        ..Default::default()
    });

    assert!(k.settings().compact_mode);
    let note = k.notifications().latest().unwrap();
    assert_eq!(note.message, "Settings could not be saved");
    assert_eq!(note.severity, Severity::Warning);
}

// =============================================================================
// Repository and Terminal Tests
// =============================================================================

#[test]
fn test_refresh_from_source() {
    let mut k = kernel();
    assert!(k.repos_loading());
    let source = MemorySource::with_repositories(vec![Repository::named("PgStudio")]);
    assert_eq!(k.refresh_repositories(&source), 1);
    assert!(!k.repos_loading());
    assert_eq!(
        k.notifications().latest().unwrap().message,
        "Loaded 1 repositories"
    );
}

#[test]
fn test_terminal_session() {
    let mut k = kernel_with_repos();
    let mut shell = Shell::new();

    assert_eq!(shell.execute(&mut k, "ls ~").text(), "projects -> /projects");
    shell.execute(&mut k, "cd projects");
    assert_eq!(shell.prompt(), "guest@asterix /projects $");

    assert_eq!(
        shell.execute(&mut k, "open foo").text(),
        "Opening /projects/foo..."
    );
    shell.execute(&mut k, "cd /");
    assert_eq!(
        shell.execute(&mut k, "open pgstudio").text(),
        "Launching viewer for PgStudio..."
    );
    assert_eq!(k.windows().count(), 2);
    let viewer = k.windows().windows()[1].id.clone();
    k.close_window(&viewer);
    let pid = k.windows().windows()[0].pid;
    let ps = shell.execute(&mut k, "ps").text();
    assert!(ps.contains("Foo — project"));

    let out = shell.execute(&mut k, &format!("kill {}", pid));
    assert!(!out.is_error());
    assert_eq!(k.windows().count(), 0);

    let out = shell.execute(&mut k, "frobnicate");
    assert!(out.is_error());
    assert_eq!(out.text(), "command not found: frobnicate");
}

#[test]
fn test_palette_commands_drive_kernel() {
    let mut k = kernel();
    assert!(k.run_command("open-terminal"));
    assert!(k.run_command("open-settings"));
    assert_eq!(k.windows().count(), 2);
    assert!(k.run_command("close-all"));
    assert_eq!(k.windows().count(), 0);
    assert!(!k.run_command("launch-rockets"));
}

#[test]
fn test_palette_shortcuts_drive_kernel() {
    let mut k = kernel();
    assert!(k.run_shortcut('t'));
    assert!(k.run_shortcut('E'));
    assert_eq!(k.windows().count(), 2);
    assert_eq!(k.windows().windows()[0].kind, AppKind::Terminal);
    assert_eq!(k.windows().windows()[1].kind, AppKind::FileExplorer);
    assert!(!k.run_shortcut('z'));
    assert_eq!(k.windows().count(), 2);

    assert!(k.run_shortcut('r'));
    assert!(k.repos_loading());
}
