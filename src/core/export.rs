// Sovereign Navigator - core/export.rs
//
// Plain-text, printable HTML, and CSV renderings of the remedy timeline and
// of generated documents.
// Core layer: builds strings or writes to any Write trait object.

use crate::core::model::{format_local_datetime, stage_icon, RemedyEvent};
use crate::util::error::ExportError;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

/// One line per event:
/// `[2024-05-01 14:03:22] [NOTICE] [user] - Notice mailed`
pub fn timeline_plaintext(events: &[&RemedyEvent]) -> String {
    events
        .iter()
        .map(|e| {
            format!(
                "[{}] [{}] [{}] - {}",
                format_local_datetime(&e.timestamp),
                e.stage.to_uppercase(),
                e.actor,
                e.action
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `remedy_timeline_2024-05-01.txt`
pub fn timeline_file_name(date: NaiveDate) -> String {
    format!("remedy_timeline_{}.txt", date.format("%Y-%m-%d"))
}

/// Saved-notice file name: the template name without `.j2`, then the date.
pub fn notice_file_name(template: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}.txt",
        template.replace(".j2", ""),
        date.format("%Y-%m-%d")
    )
}

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const TIMELINE_STYLE: &str = "\
body { font-family: sans-serif; }
.timeline-item { display: flex; align-items: center; margin-bottom: 1rem; }
.timeline-icon { font-size: 1.5rem; margin-right: 1rem; }
.timeline-details { border-left: 2px solid #ccc; padding-left: 1rem; }
.timeline-details p { margin: 0; }
.timeline-details .timestamp { font-size: 0.8rem; color: #555; }";

/// Standalone printable document for the filtered timeline.
/// The browser's print dialog turns it into a PDF.
pub fn timeline_printable_html(events: &[&RemedyEvent]) -> String {
    let mut body = String::new();
    for e in events {
        body.push_str(&format!(
            "<div class=\"timeline-item\">\
             <div class=\"timeline-icon\">{}</div>\
             <div class=\"timeline-details\">\
             <p><strong>{}</strong></p>\
             <p class=\"timestamp\">{} - by {}</p>\
             </div></div>\n",
            stage_icon(&e.stage),
            escape_html(&e.action),
            escape_html(&format_local_datetime(&e.timestamp)),
            e.actor
        ));
    }
    if events.is_empty() {
        body.push_str("<p>No remedy events recorded yet.</p>\n");
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Remedy Timeline</title>\n<style>\n{TIMELINE_STYLE}\n</style>\n</head>\n\
         <body onload=\"window.print()\">\n<h2>Remedy Timeline</h2>\n{body}</body>\n</html>\n"
    )
}

/// Printable page for a generated document (notice, affidavit).
pub fn preformatted_printable_html(title: &str, text: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n\
         <body onload=\"window.print()\">\n\
         <pre style=\"white-space: pre-wrap; word-wrap: break-word; font-family: monospace;\">{}</pre>\n\
         </body>\n</html>\n",
        escape_html(title),
        escape_html(text)
    )
}

/// Export timeline events to CSV.
///
/// Writes: timestamp, stage, actor, action, document_url
pub fn export_csv<W: Write>(
    events: &[&RemedyEvent],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_error = |source: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["timestamp", "stage", "actor", "action", "document_url"])
        .map_err(csv_error)?;

    for event in events {
        csv_writer
            .write_record([
                event.timestamp.to_rfc3339().as_str(),
                event.stage.as_str(),
                event.actor.as_str(),
                event.action.as_str(),
                event.document_url.as_deref().unwrap_or(""),
            ])
            .map_err(csv_error)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(events.len())
}
