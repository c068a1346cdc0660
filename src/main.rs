//! Scroll When Needed - demonstration entry point

use clap::Parser;
use scroll_when_needed::config::{self, KeyBindings};
use scroll_when_needed::diagnostics::TracingDiagnostics;
use scroll_when_needed::model::AppError;
use scroll_when_needed::state::AppState;
use std::path::PathBuf;
use tracing::info;

/// Terminal demo of a container that scrolls only when its content overflows
#[derive(Parser, Debug)]
#[command(name = "scroll-when-needed")]
#[command(version)]
#[command(about = "Terminal demo of a container that scrolls only when its content overflows")]
pub struct Args {
    /// Number of items shown at startup
    #[arg(short, long)]
    pub items: Option<usize>,

    /// Let short content hug the top instead of stretching to fill
    #[arg(long)]
    pub no_center: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file =
            config::load_config_with_precedence(args.config.clone()).map_err(AppError::from)?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        let center_override = if args.no_center { Some(false) } else { None };
        config::apply_cli_overrides(with_env, center_override, args.items)
    };

    scroll_when_needed::logging::init(&config.log_file_path, &config.log_level)
        .map_err(AppError::from)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let app_state = AppState::new(&config).with_diagnostics(Box::new(TracingDiagnostics));
    scroll_when_needed::view::run(app_state, KeyBindings::default())?;

    Ok(())
}
