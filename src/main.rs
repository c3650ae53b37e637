//! Soonish - terminal coming-soon splash screen.
//!
//! Renders a centered splash with a logo, a typing heading, and a live
//! countdown to the configured launch date. A small headless CLI surface
//! exists for scripting and tests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use soonish::cli;
use soonish::config::{Config, ThemePreference};
use soonish::countdown::parse_launch_date;
use soonish::tui;

/// Soonish - terminal coming-soon splash screen
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the configured launch date (`DD-MM-YYYY HH:MM:SS AM/PM`)
    #[arg(long, global = true, value_name = "DATE")]
    launch: Option<String>,

    /// Session-only theme override (not persisted until toggled)
    #[arg(long, value_name = "THEME")]
    theme: Option<ThemeArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one countdown snapshot and exit
    Status(cli::StatusArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: cli::ConfigCommand,
    },
}

/// Theme names accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Dark splash colors
    Dark,
    /// Light splash colors
    Light,
}

impl From<ThemeArg> for ThemePreference {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Status(args)) => cli::status::run(args, cli.launch.as_deref()),
        Some(Command::Config { command }) => cli::config::run(command),
        None => run_splash(&cli),
    }
}

/// Loads configuration, applies overrides, and runs the splash screen.
fn run_splash(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(date) = &cli.launch {
        config.launch.date = date.clone();
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }

    // Fail fast on a malformed launch date instead of counting toward an
    // invalid instant.
    let target = parse_launch_date(&config.launch.date).with_context(|| {
        format!(
            "Invalid launch date in configuration: {:?}",
            config.launch.date
        )
    })?;

    let mut state = tui::AppState::new(config, target);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
