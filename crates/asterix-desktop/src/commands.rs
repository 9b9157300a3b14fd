//! Command palette registry

use asterix_vfs::AppKind;
use serde::Serialize;

/// What a palette entry does when run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "app", rename_all = "kebab-case")]
pub enum PaletteAction {
    /// Open an application with its default title
    Open(AppKind),
    /// Start a repository refresh
    RefreshRepos,
    /// Close every window
    CloseAll,
}

/// One command palette entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaletteCommand {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub shortcut: Option<char>,
    pub action: PaletteAction,
}

/// All palette commands, in display order
pub const COMMANDS: [PaletteCommand; 8] = [
    PaletteCommand {
        id: "open-terminal",
        label: "Terminal",
        description: "Open a new terminal window",
        shortcut: Some('t'),
        action: PaletteAction::Open(AppKind::Terminal),
    },
    PaletteCommand {
        id: "open-computer",
        label: "My Computer",
        description: "Open the file explorer view",
        shortcut: Some('e'),
        action: PaletteAction::Open(AppKind::FileExplorer),
    },
    PaletteCommand {
        id: "open-settings",
        label: "Settings",
        description: "Open personalization and settings",
        shortcut: Some('s'),
        action: PaletteAction::Open(AppKind::Settings),
    },
    PaletteCommand {
        id: "open-properties",
        label: "System Properties",
        description: "View system metadata and GitHub stats",
        shortcut: Some('p'),
        action: PaletteAction::Open(AppKind::Properties),
    },
    PaletteCommand {
        id: "open-monitor",
        label: "Activity Monitor",
        description: "Inspect running processes",
        shortcut: None,
        action: PaletteAction::Open(AppKind::ActivityMonitor),
    },
    PaletteCommand {
        id: "open-notepad",
        label: "Notepad",
        description: "Open a scratch notepad",
        shortcut: None,
        action: PaletteAction::Open(AppKind::Notepad),
    },
    PaletteCommand {
        id: "refresh-repos",
        label: "Refresh Repositories",
        description: "Clear cache and fetch latest repos",
        shortcut: Some('r'),
        action: PaletteAction::RefreshRepos,
    },
    PaletteCommand {
        id: "close-all",
        label: "Close All Windows",
        description: "Close all open windows",
        shortcut: None,
        action: PaletteAction::CloseAll,
    },
];

/// Look up a command by id
pub fn find_command(id: &str) -> Option<&'static PaletteCommand> {
    COMMANDS.iter().find(|c| c.id == id)
}

/// Look up a command by its single-key shortcut
pub fn by_shortcut(key: char) -> Option<&'static PaletteCommand> {
    let key = key.to_ascii_lowercase();
    COMMANDS.iter().find(|c| c.shortcut == Some(key))
}

/// Commands whose id, label or description contains `query`, ignoring case
pub fn search(query: &str) -> Vec<&'static PaletteCommand> {
    let query = query.trim().to_lowercase();
    COMMANDS
        .iter()
        .filter(|c| {
            query.is_empty()
                || c.id.contains(&query)
                || c.label.to_lowercase().contains(&query)
                || c.description.to_lowercase().contains(&query)
        })
        .collect()
}
