//! Terminal output model

use serde::Serialize;

/// How a line should be rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Normal,
    /// Secondary text (progress messages)
    Muted,
    /// Highlighted names (directories, repositories)
    Accent,
    Error,
}

/// One line of command output
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

/// Result of running one command line
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    pub lines: Vec<OutputLine>,
    /// The terminal should drop its scrollback
    pub clear: bool,
}

impl CommandOutput {
    pub fn push(&mut self, text: impl Into<String>, style: LineStyle) {
        self.lines.push(OutputLine {
            text: text.into(),
            style,
        });
    }

    pub(crate) fn line(text: impl Into<String>, style: LineStyle) -> Self {
        let mut out = Self::default();
        out.push(text, style);
        out
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self::line(text, LineStyle::Error)
    }

    /// Whether any line is an error
    pub fn is_error(&self) -> bool {
        self.lines.iter().any(|l| l.style == LineStyle::Error)
    }

    /// Plain text of all lines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
