// Sovereign Navigator - ui/panels/statute.rs
//
// Statute hint: a label whose hover text shows the statute's title and
// excerpt once the statute list has loaded.

use crate::app::state::StatuteState;

/// Render `label`, with hover text when `statute_id` is known.
pub fn statute_hint(ui: &mut egui::Ui, statutes: &StatuteState, statute_id: &str, label: &str) {
    match statutes.get(statute_id) {
        Some(statute) => {
            ui.label(egui::RichText::new(label).underline())
                .on_hover_ui(|ui| {
                    ui.set_max_width(360.0);
                    ui.strong(&statute.title);
                    ui.label(&statute.excerpt);
                    if !statute.tags.is_empty() {
                        ui.small(statute.tags.join(", "));
                    }
                });
        }
        None => {
            ui.label(label);
        }
    }
}
