// Sovereign Navigator - platform/config.rs
//
// Platform data directory resolution and config.toml loading with startup
// validation. Uses the `directories` crate for XDG (Linux), AppData
// (Windows) and Library (macOS) locations.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/sovereignnavigator/).
    pub config_dir: PathBuf,

    /// Data directory for the session file and printable exports.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths, falling back to the current
    /// directory when the platform gives none.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();
            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );
            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self::in_dir(PathBuf::from("."))
        }
    }

    /// Keep config and data under one directory (`--config-dir`).
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            config_dir: dir.clone(),
            data_dir: dir,
        }
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.data_dir.join(constants::EXPORTS_DIR_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml. Unknown keys are ignored.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub api: ApiSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

/// `[api]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Backend base URL.
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub timeout_seconds: Option<u64>,
    /// User id sent with notice generation.
    pub user_id: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// "error", "warn", "info", "debug" or "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub user_id: String,
    pub dark_mode: bool,
    pub font_size: f32,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            user_id: constants::DEFAULT_USER_ID.to_string(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Location of config.toml for a given platform config directory.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir
        .parent()
        .unwrap_or(config_dir)
        .join(constants::CONFIG_FILE_NAME)
}

/// Load and validate config.toml from `path`.
///
/// Returns validated values plus non-fatal warnings for the status bar.
/// A missing file is the normal first run: defaults, no warnings. An
/// unreadable or unparseable file yields defaults and one warning.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw(path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");
    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }
    (config, warnings)
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

fn out_of_range(field: &str, value: impl ToString, expected: String) -> String {
    let e = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    };
    format!("{e}. Using default.")
}

/// Apply each present value that passes validation; record the rest.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(url) = raw.api.base_url {
        let trimmed = url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            config.api_base_url = trimmed.to_string();
        } else {
            warnings.push(out_of_range(
                "api.base_url",
                &url,
                "an http:// or https:// URL".to_string(),
            ));
        }
    }

    if let Some(secs) = raw.api.timeout_seconds {
        if (constants::MIN_REQUEST_TIMEOUT_SECS..=constants::MAX_REQUEST_TIMEOUT_SECS)
            .contains(&secs)
        {
            config.timeout_secs = secs;
        } else {
            warnings.push(out_of_range(
                "api.timeout_seconds",
                secs,
                format!(
                    "{}-{}",
                    constants::MIN_REQUEST_TIMEOUT_SECS,
                    constants::MAX_REQUEST_TIMEOUT_SECS
                ),
            ));
        }
    }

    if let Some(user_id) = raw.api.user_id {
        if user_id.trim().is_empty() {
            warnings.push(out_of_range(
                "api.user_id",
                "",
                "a non-empty id".to_string(),
            ));
        } else {
            config.user_id = user_id.trim().to_string();
        }
    }

    if let Some(theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => warnings.push(out_of_range(
                "ui.theme",
                &theme,
                "\"dark\" or \"light\"".to_string(),
            )),
        }
    }

    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(out_of_range(
                "ui.font_size",
                size,
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            ));
        }
    }

    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        let lower = level.to_lowercase();
        if valid.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(out_of_range(
                "logging.level",
                &level,
                "error, warn, info, debug or trace".to_string(),
            ));
        }
    }

    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(PathBuf::from(file));
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[api]
base_url = "https://records.example.org"
timeout_seconds = 60
user_id = "user-042"

[ui]
theme = "light"
font_size = 16.0

[logging]
level = "DEBUG"
file = "/tmp/navigator.log"

[unknown]
ignored = true
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.api_base_url, "https://records.example.org");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_id, "user-042");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/navigator.log")));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[api]
base_url = "ftp://nope"
timeout_seconds = 0

[ui]
theme = "purple"
font_size = 99.0

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 5);
        assert_eq!(config, AppConfig::default());
        assert!(warnings[1].contains("api.timeout_seconds"));
        assert!(warnings[1].contains("1-300"));
    }

    #[test]
    fn test_unparseable_file_warns_once() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api\nbase_url = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_config_path_is_beside_config_dir() {
        let path = config_path(Path::new("/home/u/.config/sovereignnavigator"));
        assert_eq!(path, PathBuf::from("/home/u/.config/config.toml"));
    }
}
