// Sovereign Navigator - ui/panels/affidavit.rs
//
// Affidavit Forge: generate an affidavit for one creditor from the user
// profile and the full remedy log.

use crate::app::state::AppState;
use crate::ui::panels::document;
use crate::ui::theme;
use chrono::Local;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f4dc} Affidavit Forge");
    ui.label(
        egui::RichText::new(
            "Compiles your profile and every logged remedy event into an affidavit.",
        )
        .weak(),
    );
    ui.add_space(8.0);

    if let Some(ref error) = state.creditors.error {
        theme::error_label(ui, error);
    }

    let mut generate = false;
    ui.horizontal(|ui| {
        ui.label("Creditor");
        let selected = state
            .affidavit
            .selected_creditor
            .as_deref()
            .and_then(|id| state.creditors.get(id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Select a creditor".to_string());
        egui::ComboBox::from_id_salt("affidavit_creditor")
            .selected_text(selected)
            .width(260.0)
            .show_ui(ui, |ui| {
                for creditor in &state.creditors.creditors {
                    ui.selectable_value(
                        &mut state.affidavit.selected_creditor,
                        Some(creditor.id.clone()),
                        &creditor.name,
                    );
                }
            });

        if ui
            .add_enabled(!state.affidavit.loading, egui::Button::new("Generate Affidavit"))
            .clicked()
        {
            generate = true;
        }
        if state.affidavit.loading {
            ui.spinner();
        }
    });
    ui.small(format!(
        "{} remedy events will be included.",
        state.remedy_log.events.len()
    ));

    if generate {
        state.generate_affidavit();
    }
    if let Some(ref error) = state.affidavit.error {
        theme::error_label(ui, error);
    }

    if state.affidavit.affidavit_text.is_empty() {
        return;
    }

    ui.add_space(10.0);
    ui.separator();
    ui.strong("Affidavit");
    document::preview(ui, "affidavit_preview", &state.affidavit.affidavit_text);
    if let Some(action) = document::action_buttons(ui) {
        let text = state.affidavit.affidavit_text.clone();
        let file_name = format!("affidavit_{}.txt", Local::now().date_naive().format("%Y-%m-%d"));
        document::perform(ui.ctx(), state, action, "Affidavit", &text, &file_name);
    }
}
