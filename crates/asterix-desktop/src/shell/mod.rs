//! Terminal shell
//!
//! Parses a command line and runs it against the kernel. The shell owns
//! only its working directory; everything else is a kernel operation.

mod output;

pub use output::{CommandOutput, LineStyle, OutputLine};

use asterix_hal::Platform;
use asterix_vfs::{
    display_path, normalize_path, resolve_path, AppKind, LaunchPayload, NodeKind, VfsNode,
    HOME_DIR, OWNER,
};

use crate::kernel::{Kernel, OpenOptions, OpenOutcome};
use crate::process::format_uptime;

const HELP: &[(&str, &str)] = &[
    ("ls [path]", "list a directory"),
    ("cd [path]", "change directory"),
    ("pwd", "print working directory"),
    ("open <path|repo|url>", "open a file, app, repository or web page"),
    ("browse [url]", "open a URL in Asterix Browser"),
    ("ps", "list running processes"),
    ("kill <pid>", "terminate a process"),
    ("refresh", "refresh repositories"),
    ("sysinfo", "open system properties"),
    ("theme", "open personalization settings"),
    ("echo <text>", "print text"),
    ("clear", "clear terminal output"),
    ("whoami", "display current user"),
    ("help", "show this message"),
];

/// Terminal session state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shell {
    cwd: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// New session in the home directory
    pub fn new() -> Self {
        Self {
            cwd: HOME_DIR.to_string(),
        }
    }

    /// Absolute working directory
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Prompt shown before the input line
    pub fn prompt(&self) -> String {
        format!("guest@asterix {} $", display_path(&self.cwd))
    }

    /// Run one command line
    pub fn execute<P: Platform>(&mut self, kernel: &mut Kernel<P>, line: &str) -> CommandOutput {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return CommandOutput::default();
        };
        let args: Vec<&str> = words.collect();
        let arg = args.first().copied();

        match command.to_lowercase().as_str() {
            "help" => help(),
            "clear" => CommandOutput {
                clear: true,
                ..Default::default()
            },
            "pwd" => CommandOutput::line(self.cwd.clone(), LineStyle::Normal),
            "ls" => self.ls(kernel, arg),
            "cd" => self.cd(kernel, arg),
            "open" => self.open(kernel, arg),
            "browse" => browse(kernel, arg),
            "ps" => ps(kernel),
            "kill" => kill(kernel, arg),
            "refresh" => {
                kernel.begin_refresh();
                CommandOutput::line("Refreshing repositories...", LineStyle::Muted)
            }
            "sysinfo" => {
                kernel.open_app(AppKind::Properties, OpenOptions::default());
                CommandOutput::line("Opening system properties...", LineStyle::Muted)
            }
            "theme" => {
                kernel.open_app(AppKind::Settings, OpenOptions::default());
                CommandOutput::line("Opening personalization settings...", LineStyle::Muted)
            }
            "whoami" => whoami(),
            "echo" => CommandOutput::line(args.join(" "), LineStyle::Normal),
            other => CommandOutput::error(format!("command not found: {}", other)),
        }
    }

    /// Resolve a user path, following a symbolic link one hop
    fn lookup<P: Platform>(&self, kernel: &Kernel<P>, raw: &str) -> Option<VfsNode> {
        let path = normalize_path(raw, &self.cwd);
        match resolve_path(&path, kernel.repos())? {
            VfsNode {
                kind: NodeKind::Link { target },
                ..
            } => resolve_path(&target, kernel.repos()),
            node => Some(node),
        }
    }

    fn ls<P: Platform>(&self, kernel: &Kernel<P>, arg: Option<&str>) -> CommandOutput {
        let target = arg.unwrap_or(".");
        let Some(node) = self.lookup(kernel, target) else {
            return CommandOutput::error(format!("ls: no such file or directory: {}", target));
        };

        let mut out = CommandOutput::default();
        match &node.kind {
            NodeKind::Dir { children } if children.is_empty() => {
                if node.path == asterix_vfs::PROJECTS_DIR {
                    out.push("No repositories found.", LineStyle::Muted);
                }
            }
            NodeKind::Dir { children } => {
                for child in children {
                    match &child.kind {
                        NodeKind::Dir { .. } => out.push(format!("{}/", child.name), LineStyle::Accent),
                        NodeKind::Link { target } => {
                            out.push(format!("{} -> {}", child.name, target), LineStyle::Accent)
                        }
                        NodeKind::App { .. } => out.push(child.name.clone(), LineStyle::Normal),
                    }
                }
            }
            _ => out.push(node.name.clone(), LineStyle::Normal),
        }
        out
    }

    fn cd<P: Platform>(&mut self, kernel: &Kernel<P>, arg: Option<&str>) -> CommandOutput {
        let target = arg.unwrap_or("~");
        match self.lookup(kernel, target) {
            Some(node) if node.is_dir() => {
                self.cwd = node.path;
                CommandOutput::default()
            }
            Some(_) => CommandOutput::error(format!("cd: not a directory: {}", target)),
            None => CommandOutput::error(format!("cd: no such file or directory: {}", target)),
        }
    }

    fn open<P: Platform>(&self, kernel: &mut Kernel<P>, arg: Option<&str>) -> CommandOutput {
        let Some(target) = arg else {
            return CommandOutput::error("Usage: open <path|repo|url>");
        };

        if let Some(node) = self.lookup(kernel, target) {
            if node.is_dir() {
                return CommandOutput::error(format!(
                    "open: {} is a directory, use cd to navigate",
                    display_path(&node.path)
                ));
            }
            let path = normalize_path(target, &self.cwd);
            return match kernel.open_path(&path) {
                OpenOutcome::Opened(_) => {
                    CommandOutput::line(format!("Opening {}...", path), LineStyle::Muted)
                }
                _ => CommandOutput::error(format!("open: no such file or directory: {}", target)),
            };
        }

        let Some(name) = kernel.find_repository(target).map(|r| r.name.clone()) else {
            if looks_like_url(target) {
                let route = kernel.open_url(target);
                return CommandOutput::line(
                    format!("Browsing {}", route.display_url()),
                    LineStyle::Muted,
                );
            }
            return CommandOutput::error(format!("open: repository not found: {}", target));
        };
        kernel.open_app(
            AppKind::ProjectViewer,
            OpenOptions::payload(LaunchPayload::repository(name.clone())),
        );
        CommandOutput::line(format!("Launching viewer for {}...", name), LineStyle::Muted)
    }
}

/// Web addresses typed without going through `browse`
fn looks_like_url(target: &str) -> bool {
    target.contains("://") || target.starts_with("about:") || target.starts_with("www.")
}

fn help() -> CommandOutput {
    let mut out = CommandOutput::default();
    for (usage, what) in HELP {
        out.push(format!("{:<18} {}", usage, what), LineStyle::Normal);
    }
    out
}

fn browse<P: Platform>(kernel: &mut Kernel<P>, arg: Option<&str>) -> CommandOutput {
    let route = kernel.open_url(arg.unwrap_or(""));
    CommandOutput::line(format!("Browsing {}", route.display_url()), LineStyle::Muted)
}

fn ps<P: Platform>(kernel: &Kernel<P>) -> CommandOutput {
    let mut out = CommandOutput::line(
        format!("{:>5}  {:>6}  {:>8}  {}", "PID", "MEM", "UPTIME", "TITLE"),
        LineStyle::Accent,
    );
    for row in kernel.process_list() {
        out.push(
            format!(
                "{:>5}  {:>4}MB  {:>8}  {}",
                row.pid,
                row.memory_mb,
                format_uptime(row.uptime_ms),
                row.title
            ),
            LineStyle::Normal,
        );
    }
    out
}

fn kill<P: Platform>(kernel: &mut Kernel<P>, arg: Option<&str>) -> CommandOutput {
    let Some(raw) = arg else {
        return CommandOutput::error("Usage: kill <pid>");
    };
    let Ok(pid) = raw.parse::<u32>() else {
        return CommandOutput::error(format!("kill: invalid pid: {}", raw));
    };
    if kernel.kill_pid(pid) {
        CommandOutput::line(format!("Terminated PID {}", pid), LineStyle::Muted)
    } else {
        CommandOutput::error(format!("kill: no such process: {}", pid))
    }
}

fn whoami() -> CommandOutput {
    let mut out = CommandOutput::line(OWNER, LineStyle::Accent);
    out.push("Engineering interfaces that think.", LineStyle::Normal);
    out.push(format!("https://github.com/{}", OWNER), LineStyle::Muted);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterix_hal_mock::MockPlatform;
    use asterix_vfs::Repository;

    fn kernel() -> Kernel<MockPlatform> {
        let mut kernel = Kernel::new(MockPlatform::new());
        kernel.complete_refresh(Ok(vec![
            Repository::named("PgStudio"),
            Repository::named("Portfolio"),
        ]));
        kernel
    }

    #[test]
    fn test_prompt_uses_tilde() {
        let shell = Shell::new();
        assert_eq!(shell.prompt(), "guest@asterix ~ $");
    }

    #[test]
    fn test_cd_and_pwd() {
        let mut k = kernel();
        let mut shell = Shell::new();

        assert!(!shell.execute(&mut k, "cd /var").is_error());
        assert_eq!(shell.execute(&mut k, "pwd").text(), "/var");
        shell.execute(&mut k, "cd ..");
        assert_eq!(shell.cwd(), "/");
        shell.execute(&mut k, "cd");
        assert_eq!(shell.cwd(), HOME_DIR);
    }

    #[test]
    fn test_cd_follows_link() {
        let mut k = kernel();
        let mut shell = Shell::new();
        shell.execute(&mut k, "cd projects");
        assert_eq!(shell.cwd(), "/projects");
        let out = shell.execute(&mut k, "ls");
        assert_eq!(out.text(), "PgStudio\nPortfolio");
    }

    #[test]
    fn test_cd_errors() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let out = shell.execute(&mut k, "cd /nowhere");
        assert_eq!(out.text(), "cd: no such file or directory: /nowhere");
        let out = shell.execute(&mut k, "cd /settings");
        assert_eq!(out.text(), "cd: not a directory: /settings");
        assert_eq!(shell.cwd(), HOME_DIR);
    }

    #[test]
    fn test_ls_root() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let out = shell.execute(&mut k, "ls /");
        assert_eq!(out.text(), "home/\nprojects/\nsettings\nsystem\nvar/");
    }

    #[test]
    fn test_ls_empty_projects() {
        let mut k = Kernel::new(MockPlatform::new());
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute(&mut k, "ls /projects").text(),
            "No repositories found."
        );
    }

    #[test]
    fn test_open_repository_by_name() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let out = shell.execute(&mut k, "open pgstudio");
        assert_eq!(out.text(), "Launching viewer for PgStudio...");
        let window = &k.windows().windows()[0];
        assert_eq!(window.kind, AppKind::ProjectViewer);
        assert_eq!(window.title, "PgStudio — project");
    }

    #[test]
    fn test_open_path() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let out = shell.execute(&mut k, "open /var/log");
        assert!(!out.is_error());
        assert_eq!(k.windows().windows()[0].kind, AppKind::ActivityMonitor);

        let out = shell.execute(&mut k, "open /var");
        assert!(out.is_error());
        let out = shell.execute(&mut k, "open nothing-here");
        assert_eq!(out.text(), "open: repository not found: nothing-here");
        assert!(shell.execute(&mut k, "open").is_error());
    }

    #[test]
    fn test_open_directory_stays_in_shell() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let before = k.notifications().len();
        let out = shell.execute(&mut k, "open /projects");
        assert_eq!(out.lines.len(), 1);
        assert_eq!(
            out.text(),
            "open: /projects is a directory, use cd to navigate"
        );
        assert_eq!(k.notifications().len(), before);
        assert_eq!(k.windows().count(), 0);
    }

    #[test]
    fn test_open_url_launches_browser() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let out = shell.execute(&mut k, "open https://example.com");
        assert!(!out.is_error());
        assert!(out.text().starts_with("Browsing "));
        assert_eq!(k.windows().count(), 1);
        assert_eq!(k.windows().windows()[0].kind, AppKind::Browser);

        shell.execute(&mut k, "open www.example.org");
        assert_eq!(k.windows().count(), 1);
        assert_eq!(
            shell.execute(&mut k, "open README.md").text(),
            "open: repository not found: README.md"
        );
    }

    #[test]
    fn test_ps_and_kill() {
        let mut k = kernel();
        let mut shell = Shell::new();
        shell.execute(&mut k, "sysinfo");
        shell.execute(&mut k, "theme");

        let out = shell.execute(&mut k, "ps");
        assert_eq!(out.lines.len(), 3);
        assert!(out.lines[1].text.ends_with("Properties"));

        assert_eq!(shell.execute(&mut k, "kill 1").text(), "Terminated PID 1");
        assert_eq!(k.windows().count(), 1);
        assert_eq!(
            shell.execute(&mut k, "kill 1").text(),
            "kill: no such process: 1"
        );
        assert_eq!(
            shell.execute(&mut k, "kill abc").text(),
            "kill: invalid pid: abc"
        );
    }

    #[test]
    fn test_misc_commands() {
        let mut k = kernel();
        let mut shell = Shell::new();
        assert!(shell.execute(&mut k, "clear").clear);
        assert_eq!(shell.execute(&mut k, "echo  hello   world").text(), "hello world");
        assert_eq!(shell.execute(&mut k, "").lines.len(), 0);
        assert_eq!(shell.execute(&mut k, "HELP").lines.len(), HELP.len());
        assert_eq!(
            shell.execute(&mut k, "rm -rf /").text(),
            "command not found: rm"
        );
        assert!(shell.execute(&mut k, "whoami").text().starts_with(OWNER));
    }

    #[test]
    fn test_browse_opens_browser() {
        let mut k = kernel();
        let mut shell = Shell::new();
        let out = shell.execute(&mut k, "browse /settings");
        assert_eq!(out.text(), "Browsing /settings");
        assert_eq!(k.windows().windows()[0].kind, AppKind::Browser);
    }

    #[test]
    fn test_refresh_marks_loading() {
        let mut k = kernel();
        let mut shell = Shell::new();
        shell.execute(&mut k, "refresh");
        assert!(k.repos_loading());
    }
}
