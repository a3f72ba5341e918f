// Sovereign Navigator - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Sovereign Financial Navigator";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SovereignNavigator";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// API defaults
// =============================================================================

/// Backend base URL used when neither the CLI nor config.toml provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum configurable request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum configurable request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// User identifier sent with notice generation requests.
pub const DEFAULT_USER_ID: &str = "user-001";

/// Statute referenced by the notice generator heading.
pub const NOTICE_STATUTE_ID: &str = "15usc1692g";

/// Status shown for dispatches whose linked notice status cannot be resolved.
pub const DISPATCH_STATUS_UNKNOWN: &str = "N/A";

/// Bill status that allows endorsement.
pub const BILL_STATUS_PENDING: &str = "pending";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Repaint interval while background requests are outstanding.
pub const REQUEST_POLL_INTERVAL_MS: u64 = 100;

/// Maximum number of request results processed by the UI per frame.
pub const MAX_RESPONSES_PER_FRAME: usize = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Files
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";

/// Subdirectory of the data directory that receives printable exports.
pub const EXPORTS_DIR_NAME: &str = "exports";

/// Default file name for a saved affidavit of mailing.
pub const AFFIDAVIT_OF_MAILING_FILE_NAME: &str = "affidavit_of_mailing.txt";
