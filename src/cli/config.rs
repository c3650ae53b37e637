//! Configuration inspection commands.

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use crate::config::Config;

/// Subcommands of `soonish config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show {
        /// Emit machine-readable JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file
    Init,
    /// Print the config file path
    Path,
}

/// Runs a `config` subcommand.
pub fn run(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show { json } => show(*json),
        ConfigCommand::Init => init(),
        ConfigCommand::Path => path(),
    }
}

fn show(json: bool) -> Result<()> {
    let config = Config::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?
        );
    }

    Ok(())
}

fn init() -> Result<()> {
    let config_path = Config::config_file_path()?;

    if config_path.exists() {
        bail!("Config file already exists: {}", config_path.display());
    }

    Config::first_run().save()?;
    println!("Created {}", config_path.display());

    Ok(())
}

fn path() -> Result<()> {
    println!("{}", Config::config_file_path()?.display());
    Ok(())
}
