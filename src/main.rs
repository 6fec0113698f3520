//! Intently - a phrase-driven terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! intently notes.txt
//! intently --window-ms 500 --high-ms 100 notes.txt
//! intently --intent-log intents.jsonl notes.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use intently::app::App;
use intently::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use intently::intent_log;

/// A terminal text editor driven by typed phrases
#[derive(Parser, Debug)]
#[command(name = "intently", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Keystroke window in milliseconds
    #[arg(long, value_name = "MS")]
    window_ms: Option<u64>,

    /// How long after an intent the same phrase counts as a repeat
    #[arg(long, value_name = "MS")]
    repeat_window_ms: Option<u64>,

    /// Mean key gap below which typing counts as fast
    #[arg(long, value_name = "MS")]
    high_ms: Option<u64>,

    /// Mean key gap below which typing counts as moderate
    #[arg(long, value_name = "MS")]
    medium_ms: Option<u64>,

    /// Append every recognized intent to a JSON-lines file
    #[arg(long, value_name = "PATH")]
    intent_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        window_ms: cli.window_ms,
        repeat_window_ms: cli.repeat_window_ms,
        high_ms: cli.high_ms,
        medium_ms: cli.medium_ms,
        intent_log: cli.intent_log.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let intent_log_path = effective
        .intent_log
        .clone()
        .or_else(|| std::env::var_os("INTENTLY_INTENT_LOG").map(PathBuf::from));
    if let Err(err) = intent_log::set_log_path(intent_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to open intent log {}: {}",
            intent_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let engine_config = effective
        .engine_config()
        .context("Invalid timing configuration")?;

    let mut app = App::new(cli.file).with_engine_config(engine_config);

    app.run().context("Application error")
}
