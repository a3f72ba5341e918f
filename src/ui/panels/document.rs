// Sovereign Navigator - ui/panels/document.rs
//
// Shared preview and Copy / Save / Print controls for generated documents
// (notices, affidavits, affidavits of mailing).

use crate::app::exports;
use crate::app::state::AppState;
use crate::core::export;
use crate::ui::theme;
use crate::util::error::NavigatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    Copy,
    Save,
    Print,
}

/// Read-only, scrollable monospace preview.
pub fn preview(ui: &mut egui::Ui, id_salt: &str, text: &str) {
    let max_height =
        ui.text_style_height(&egui::TextStyle::Monospace) * theme::DOCUMENT_PREVIEW_ROWS as f32;
    egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .max_height(max_height)
        .show(ui, |ui| {
            let mut view = text;
            ui.add(
                egui::TextEdit::multiline(&mut view)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}

/// Render the action row; returns the clicked action, if any.
pub fn action_buttons(ui: &mut egui::Ui) -> Option<DocumentAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("\u{1f4cb} Copy").clicked() {
            action = Some(DocumentAction::Copy);
        }
        if ui.button("\u{1f4be} Save as .txt").clicked() {
            action = Some(DocumentAction::Save);
        }
        if ui.button("\u{1f5a8} Print / PDF").clicked() {
            action = Some(DocumentAction::Print);
        }
    });
    action
}

/// Carry out `action` on `text`. Outcomes go to the status bar.
pub fn perform(
    ctx: &egui::Context,
    state: &mut AppState,
    action: DocumentAction,
    title: &str,
    text: &str,
    file_name: &str,
) {
    match action {
        DocumentAction::Copy => {
            ctx.copy_text(text.to_string());
            state.status_message = format!("{title} copied to clipboard.");
        }
        DocumentAction::Save => {
            let Some(dest) = rfd::FileDialog::new()
                .add_filter("Text", &["txt"])
                .set_file_name(file_name)
                .save_file()
            else {
                return;
            };
            match exports::save_text(&dest, text) {
                Ok(()) => state.status_message = format!("Saved {}.", dest.display()),
                Err(e) => report_failure(state, title, e),
            }
        }
        DocumentAction::Print => {
            let html_name = format!("{}.html", file_name.trim_end_matches(".txt"));
            let html = export::preformatted_printable_html(title, text);
            match exports::open_printable(&state.exports_dir, &html_name, &html) {
                Ok(path) => {
                    state.status_message = format!("Opened {} for printing.", path.display());
                }
                Err(e) => report_failure(state, title, e),
            }
        }
    }
}

pub fn report_failure(state: &mut AppState, what: &str, error: impl Into<NavigatorError>) {
    let error = error.into();
    tracing::warn!(document = what, error = %error, "Export failed");
    let msg = format!("{what}: {error}");
    state.status_message = msg.clone();
    state.warnings.push(msg);
}
