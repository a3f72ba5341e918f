// Sovereign Navigator - app/session.rs
//
// Session persistence: the last open view and the timeline filters survive
// restarts. Server data is never persisted; every view refetches on open.
//
// - Saved atomically (write temp, rename final).
// - Load failures start the app fresh; they are logged, never surfaced.

use crate::core::filter::TimelineFilter;
use crate::core::model::Page;
use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bump when `SessionData` changes incompatibly. Mismatches are discarded.
pub const SESSION_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub version: u32,

    #[serde(default)]
    pub page: Page,

    #[serde(default)]
    pub timeline_filter: TimelineFilter,
}

impl SessionData {
    pub fn new(page: Page, timeline_filter: TimelineFilter) -> Self {
        Self {
            version: SESSION_VERSION,
            page,
            timeline_filter,
        }
    }
}

pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically, creating parent directories.
///
/// The error string is meant for a `warn!`; callers log and continue.
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "cannot create session directory '{}': {e}",
                parent.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialise session: {e}"))?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes())
        .map_err(|e| format!("failed to write session temp file '{}': {e}", tmp.display()))?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        format!("failed to finalise session file '{}': {e}", path.display())
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load a session, or `None` when missing, malformed, or from another version.
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed, starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch, starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), "Session file loaded");
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Actor;
    use tempfile::TempDir;

    fn sample_data() -> SessionData {
        SessionData::new(
            Page::DispatchTracker,
            TimelineFilter {
                stage: Some("rebuttal".to_string()),
                actor: Some(Actor::System),
            },
        )
    }

    #[test]
    fn test_session_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let original = sample_data();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_session_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.json");
        save(&sample_data(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut data = sample_data();
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_session_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, br#"{"version": 1}"#).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.page, Page::Dashboard);
        assert!(loaded.timeline_filter.is_empty());
    }

    #[test]
    fn test_session_save_overwrites_leftover_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        save(&sample_data(), &path).unwrap();

        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let updated = SessionData::new(Page::Profile, TimelineFilter::default());
        save(&updated, &path).unwrap();
        assert_eq!(load(&path).unwrap().page, Page::Profile);
    }
}
