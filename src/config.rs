//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// Persisted theme preference.
///
/// Only `dark` and `light` are ever written to disk. On the very first run
/// (no config file yet) the preference follows the OS theme setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark splash colors for dark terminal backgrounds
    #[default]
    Dark,
    /// Light splash colors for light terminal backgrounds
    Light,
}

impl ThemePreference {
    /// Returns the opposite preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Detects the OS theme for the first-run default.
    ///
    /// Falls back to dark when the OS reports nothing useful.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::Dark,
        }
    }
}

/// Launch target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Launch date-time in `DD-MM-YYYY HH:MM:SS AM/PM` format, local time
    #[serde(default = "default_launch_date")]
    pub date: String,
    /// Heading text typed on the splash screen; `\n` starts a new line
    #[serde(default = "default_heading")]
    pub heading: String,
}

fn default_launch_date() -> String {
    "25-11-2025 12:00:00 PM".to_string()
}

fn default_heading() -> String {
    "We Are\nLaunching Soon".to_string()
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            date: default_launch_date(),
            heading: default_heading(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme preference, persisted on every toggle
    #[serde(default)]
    pub theme: ThemePreference,
    /// Optional path to a text file rendered instead of the built-in logo
    #[serde(default)]
    pub custom_logo: Option<PathBuf>,
}

/// Typing animation timings and repeat behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Delay between typed characters, in milliseconds
    #[serde(default = "default_type_speed_ms")]
    pub type_speed_ms: u64,
    /// Delay between erased characters, in milliseconds
    #[serde(default = "default_erase_speed_ms")]
    pub erase_speed_ms: u64,
    /// Pause after the heading is fully typed, in milliseconds
    #[serde(default = "default_pause_after_type_ms")]
    pub pause_after_type_ms: u64,
    /// Pause after the heading is fully erased, in milliseconds
    #[serde(default = "default_pause_after_erase_ms")]
    pub pause_after_erase_ms: u64,
    /// Number of full type cycles before the heading freezes (0 = loop forever)
    #[serde(default)]
    pub repeat_count: u32,
}

fn default_type_speed_ms() -> u64 {
    150
}

fn default_erase_speed_ms() -> u64 {
    100
}

fn default_pause_after_type_ms() -> u64 {
    2000
}

fn default_pause_after_erase_ms() -> u64 {
    1000
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            type_speed_ms: default_type_speed_ms(),
            erase_speed_ms: default_erase_speed_ms(),
            pause_after_type_ms: default_pause_after_type_ms(),
            pause_after_erase_ms: default_pause_after_erase_ms(),
            repeat_count: 0,
        }
    }
}

impl AnimationConfig {
    /// Delay between typed characters.
    #[must_use]
    pub const fn type_speed(&self) -> Duration {
        Duration::from_millis(self.type_speed_ms)
    }

    /// Delay between erased characters.
    #[must_use]
    pub const fn erase_speed(&self) -> Duration {
        Duration::from_millis(self.erase_speed_ms)
    }

    /// Pause after the heading is fully typed.
    #[must_use]
    pub const fn pause_after_type(&self) -> Duration {
        Duration::from_millis(self.pause_after_type_ms)
    }

    /// Pause after the heading is fully erased.
    #[must_use]
    pub const fn pause_after_erase(&self) -> Duration {
        Duration::from_millis(self.pause_after_erase_ms)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Soonish/config.toml`
/// - macOS: `~/Library/Application Support/Soonish/config.toml`
/// - Windows: `%APPDATA%\Soonish\config.toml`
///
/// The `SOONISH_CONFIG_DIR` environment variable overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Launch target settings
    #[serde(default)]
    pub launch: LaunchConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Typing animation settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a machine with no saved configuration.
    ///
    /// The theme follows the OS setting until the user toggles it; every
    /// later run reads the persisted flag instead.
    #[must_use]
    pub fn first_run() -> Self {
        let mut config = Self::new();
        config.ui.theme = ThemePreference::detect();
        config
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// Honors the `SOONISH_CONFIG_DIR` environment variable before falling
    /// back to the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns first-run defaults without
    /// touching the disk.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::first_run());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// The launch date must parse; a malformed date is rejected here so the
    /// application fails at startup instead of counting toward an invalid
    /// instant. The theme is restricted to dark/light by the type system.
    pub fn validate(&self) -> Result<()> {
        crate::countdown::parse_launch_date(&self.launch.date).context(format!(
            "Invalid launch date in configuration: {:?}",
            self.launch.date
        ))?;

        Ok(())
    }
}
