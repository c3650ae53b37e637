//! Splash logo selection.
//!
//! The logo is chosen exactly once at startup: a configured custom logo
//! file wins, anything else shows the built-in banner. There is no re-read
//! during the session.

use std::fs;
use std::path::Path;

/// Built-in ASCII banner shown when no custom logo is configured.
pub const DEFAULT_LOGO: &[&str] = &[
    "███████╗ ██████╗  ██████╗ ███╗   ██╗",
    "██╔════╝██╔═══██╗██╔═══██╗████╗  ██║",
    "███████╗██║   ██║██║   ██║██╔██╗ ██║",
    "╚════██║██║   ██║██║   ██║██║╚██╗██║",
    "███████║╚██████╔╝╚██████╔╝██║ ╚████║",
    "╚══════╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═══╝",
];

/// The splash logo, resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    lines: Vec<String>,
}

impl Logo {
    /// Chooses the logo for this session.
    ///
    /// A configured custom path is read once as UTF-8 text, one display
    /// line per file line. An empty path or an unreadable file falls back
    /// to the built-in banner.
    #[must_use]
    pub fn select(custom: Option<&Path>) -> Self {
        let Some(path) = custom.filter(|p| !p.as_os_str().is_empty()) else {
            return Self::builtin();
        };

        match fs::read_to_string(path) {
            Ok(text) => {
                let lines: Vec<String> = text
                    .lines()
                    .map(str::to_string)
                    .collect();
                if lines.is_empty() {
                    Self::builtin()
                } else {
                    Self { lines }
                }
            }
            Err(_) => Self::builtin(),
        }
    }

    /// The built-in banner.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            lines: DEFAULT_LOGO.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// The logo lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Display height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Display width in columns (the widest line).
    #[must_use]
    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16
    }
}
