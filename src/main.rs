//! Replays a recorded annotation session without a display.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use frame_viewer::config::AppConfig;
use frame_viewer::session::{SessionScript, run_session};

/// Replay a frame annotation session script and print the resulting markers.
#[derive(Parser, Debug)]
#[command(name = "frame-viewer-replay", version)]
struct Cli {
    /// Session script (JSON)
    script: PathBuf,

    /// Configuration file (default: the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the marker shortcut keys before replaying
    #[arg(long)]
    list_shortcuts: bool,

    /// Store the effective configuration in the user config directory
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load_from_default_path().unwrap_or_default(),
    };

    // RUST_LOG still overrides the configured level
    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if cli.save_config {
        config
            .save_to_default_path()
            .context("Failed to save configuration")?;
    }

    if cli.list_shortcuts {
        for (key, template) in config.shortcuts.iter() {
            eprintln!("{key}: {}", template.describe());
        }
    }

    let script = SessionScript::load(&cli.script)
        .with_context(|| format!("Failed to read session script {}", cli.script.display()))?;
    let report = run_session(&script, &config)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
