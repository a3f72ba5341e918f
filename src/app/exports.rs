// Sovereign Navigator - app/exports.rs
//
// File-side of document export: plain text saves, timeline CSV, and
// printable HTML handed to the system browser for "Save as PDF".
// Choosing the destination (rfd dialogs) is the UI's job.

use crate::core::export;
use crate::core::model::RemedyEvent;
use crate::util::error::ExportError;
use std::path::{Path, PathBuf};

/// Write `text` to `path` as UTF-8.
pub fn save_text(path: &Path, text: &str) -> Result<(), ExportError> {
    if text.is_empty() {
        return Err(ExportError::Empty);
    }
    std::fs::write(path, text.as_bytes()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "Text document saved");
    Ok(())
}

/// Write the given timeline events as CSV. Returns the row count.
pub fn save_timeline_csv(events: &[&RemedyEvent], path: &Path) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = export::export_csv(events, file, path)?;
    tracing::info!(path = %path.display(), rows, "Timeline exported to CSV");
    Ok(rows)
}

/// Write a printable HTML document into `exports_dir`, creating it if needed.
pub fn write_printable(
    exports_dir: &Path,
    file_name: &str,
    html: &str,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(exports_dir).map_err(|source| ExportError::Io {
        path: exports_dir.to_path_buf(),
        source,
    })?;
    let path = exports_dir.join(file_name);
    std::fs::write(&path, html.as_bytes()).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write a printable document and open it with the system handler.
/// The page calls `window.print()` on load.
pub fn open_printable(
    exports_dir: &Path,
    file_name: &str,
    html: &str,
) -> Result<PathBuf, ExportError> {
    let path = write_printable(exports_dir, file_name, html)?;
    open::that(&path).map_err(|source| ExportError::Open {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Printable document opened");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Actor;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn event(id: &str, action: &str) -> RemedyEvent {
        RemedyEvent {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            action: action.to_string(),
            actor: Actor::User,
            stage: "notice".to_string(),
            document_url: None,
        }
    }

    #[test]
    fn test_save_text_writes_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notice.txt");
        save_text(&path, "NOTICE OF DISPUTE").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "NOTICE OF DISPUTE");
    }

    #[test]
    fn test_save_text_rejects_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        assert!(matches!(save_text(&path, ""), Err(ExportError::Empty)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_timeline_csv_counts_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeline.csv");
        let a = event("1", "Sent notice");
        let b = event("2", "Sent rebuttal, certified");
        let rows = save_timeline_csv(&[&a, &b], &path).unwrap();
        assert_eq!(rows, 2);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("\"Sent rebuttal, certified\""));
    }

    #[test]
    fn test_save_timeline_csv_bad_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("timeline.csv");
        let a = event("1", "x");
        assert!(matches!(
            save_timeline_csv(&[&a], &path),
            Err(ExportError::Io { .. })
        ));
    }

    #[test]
    fn test_write_printable_creates_exports_dir() {
        let dir = TempDir::new().unwrap();
        let exports = dir.path().join("exports");
        let path = write_printable(&exports, "timeline.html", "<html></html>").unwrap();
        assert_eq!(path, exports.join("timeline.html"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }
}
