//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs) to make
//! future rebranding easier. Change values here to rebrand the entire application.

/// The human-readable display name of the application.
///
/// Used in:
/// - The splash screen title bar
/// - Help text
/// - Documentation
pub const APP_DISPLAY_NAME: &str = "Soonish";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Binary executable name
/// - Command examples in documentation
pub const APP_BINARY_NAME: &str = "soonish";

/// The directory name for application data (the config file).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Soonish";

/// Environment variable that overrides the config directory.
///
/// Set by tests and scripts to isolate configuration state from the
/// user's real config directory.
pub const CONFIG_DIR_ENV: &str = "SOONISH_CONFIG_DIR";

/// The GitHub repository owner/organization name.
pub const GITHUB_OWNER: &str = "soonish-tui";

/// The GitHub repository name.
pub const GITHUB_REPO: &str = "soonish";

/// The full GitHub repository URL.
pub const GITHUB_URL: &str = "https://github.com/soonish-tui/soonish";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Terminal coming-soon splash screen with launch countdown";

// ============================================================================
// Derived constants (computed from the above values)
// ============================================================================

/// GitHub releases URL.
pub fn github_releases_url() -> String {
    format!("{}/releases", GITHUB_URL)
}

/// GitHub issues URL.
pub fn github_issues_url() -> String {
    format!("{}/issues", GITHUB_URL)
}
