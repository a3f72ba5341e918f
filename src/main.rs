// Sovereign Navigator - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation
// 4. Backend client and session restore
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export library modules so `gui.rs` can use `crate::app::...` etc.
pub use sovereign_navigator::app;
pub use sovereign_navigator::core;
pub use sovereign_navigator::platform;
pub use sovereign_navigator::ui;
pub use sovereign_navigator::util;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Sovereign Financial Navigator - record keeping for creditor correspondence.
///
/// Tracks creditors, the remedy timeline, bills, notices, affidavits and
/// dispatches against a record-keeping backend.
#[derive(Parser, Debug)]
#[command(name = "sovereign-navigator", version, about)]
struct Cli {
    /// Backend base URL (overrides `[api] base_url`).
    #[arg(long = "api-url")]
    api_url: Option<String>,

    /// Directory holding config.toml and session data.
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = match cli.config_dir {
        Some(ref dir) => platform::config::PlatformPaths::in_dir(dir.clone()),
        None => platform::config::PlatformPaths::resolve(),
    };
    let config_path = match cli.config_dir {
        Some(ref dir) => dir.join(util::constants::CONFIG_FILE_NAME),
        None => platform::config::config_path(&platform_paths.config_dir),
    };

    // Config is read before logging exists; its warnings are replayed below.
    let (config, config_warnings) = platform::config::load_config(&config_path);

    let _log_guard = util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Sovereign Navigator starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let api_base_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api_base_url.clone());
    let client = match app::api::ApiClient::new(
        &api_base_url,
        Duration::from_secs(config.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = client.base_url(), "Backend configured");

    let mut state = app::state::AppState::new(config.user_id.clone(), cli.debug);
    state.dark_mode = config.dark_mode;
    state.warnings = config_warnings;
    state.exports_dir = platform_paths.exports_dir();

    let session_path = app::session::session_path(&platform_paths.data_dir);
    if let Some(session) = app::session::load(&session_path) {
        state.apply_session(session);
    }
    state.session_path = Some(session_path);

    let requests = app::requests::RequestManager::new(client);
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(gui::SovereignNavigatorApp::new(
                state,
                requests,
                api_base_url,
                font_size,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch {}: {e}", util::constants::APP_NAME);
        std::process::exit(1);
    }
}
