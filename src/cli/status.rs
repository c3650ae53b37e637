//! Headless countdown snapshot command.

use anyhow::Result;
use chrono::Local;
use clap::Args;

use crate::config::Config;
use crate::countdown::{parse_launch_date, Countdown};

/// Arguments for `soonish status`.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Emit machine-readable JSON instead of the DD:HH:MM:SS line
    #[arg(long)]
    pub json: bool,
}

/// Prints one countdown snapshot and exits.
///
/// `launch_override` replaces the configured launch date for this
/// invocation only.
pub fn run(args: &StatusArgs, launch_override: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let date = launch_override.unwrap_or(&config.launch.date);
    let target = parse_launch_date(date)?;

    let mut countdown = Countdown::new(target);
    let parts = countdown.tick(Local::now());

    if args.json {
        let payload = serde_json::json!({
            "days": parts.days,
            "hours": parts.hours,
            "minutes": parts.minutes,
            "seconds": parts.seconds,
            "expired": countdown.is_expired(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", parts.view());
    }

    Ok(())
}
