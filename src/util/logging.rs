// Sovereign Navigator - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr always; additionally to a file when [logging] file is set.
// Never logs request bodies, profile contents, or generated documents.

use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the logging subsystem.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
///
/// Returns the file writer's guard when a log file is active. The caller must
/// keep it alive for the lifetime of the process or buffered lines are lost.
pub fn init(
    debug_flag: bool,
    config_level: Option<&str>,
    log_file: Option<&Path>,
) -> Option<WorkerGuard> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let mut guard = None;
    let file_layer = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let (writer, file_guard) = tracing_appender::non_blocking(file);
                guard = Some(file_guard);
                Some(fmt::layer().with_writer(writer).with_ansi(false))
            }
            Err(e) => {
                // The subscriber is not installed yet, so stderr is the only channel.
                eprintln!("Cannot open log file '{}': {e}", path.display());
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        file_logging = guard.is_some(),
        "Logging initialised"
    );

    guard
}
