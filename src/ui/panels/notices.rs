// Sovereign Navigator - ui/panels/notices.rs
//
// Notice Generator: pick a template and a creditor, generate, then copy,
// save or print the result.

use crate::app::state::AppState;
use crate::core::export;
use crate::core::forms::template_display_name;
use crate::ui::panels::document;
use crate::ui::panels::statute::statute_hint;
use crate::ui::theme;
use crate::util::constants::NOTICE_STATUTE_ID;
use chrono::Local;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("\u{2709} Notice Generator");
        ui.label("under");
        statute_hint(ui, &state.statutes, NOTICE_STATUTE_ID, "15 U.S.C. \u{00a7}1692g");
    });
    ui.add_space(8.0);

    let mut generate = false;
    egui::Grid::new("notice_form")
        .num_columns(2)
        .min_col_width(theme::FORM_LABEL_WIDTH)
        .show(ui, |ui| {
            ui.label("Template");
            let selected = state
                .notices
                .selected_template
                .as_deref()
                .map(template_display_name)
                .unwrap_or_else(|| "Select a template".to_string());
            egui::ComboBox::from_id_salt("notice_template")
                .selected_text(selected)
                .width(260.0)
                .show_ui(ui, |ui| {
                    for template in &state.notices.templates {
                        ui.selectable_value(
                            &mut state.notices.selected_template,
                            Some(template.clone()),
                            template_display_name(template),
                        );
                    }
                });
            ui.end_row();

            ui.label("Creditor");
            let selected = state
                .notices
                .selected_creditor
                .as_deref()
                .and_then(|id| state.creditors.get(id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Select a creditor".to_string());
            egui::ComboBox::from_id_salt("notice_creditor")
                .selected_text(selected)
                .width(260.0)
                .show_ui(ui, |ui| {
                    for creditor in &state.creditors.creditors {
                        ui.selectable_value(
                            &mut state.notices.selected_creditor,
                            Some(creditor.id.clone()),
                            &creditor.name,
                        );
                    }
                });
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.notices.loading, egui::Button::new("Generate Notice"))
            .clicked()
        {
            generate = true;
        }
        if state.notices.loading {
            ui.spinner();
            ui.label("Generating...");
        }
    });
    if generate {
        state.generate_notice();
    }

    if let Some(ref error) = state.notices.error {
        theme::error_label(ui, error);
    }
    if let Some(ref error) = state.creditors.error {
        theme::error_label(ui, error);
    }

    if state.notices.notice_text.is_empty() {
        return;
    }

    ui.add_space(10.0);
    ui.separator();
    ui.strong("Generated Notice");
    document::preview(ui, "notice_preview", &state.notices.notice_text);
    if let Some(action) = document::action_buttons(ui) {
        let text = state.notices.notice_text.clone();
        let template = state.notices.selected_template.clone().unwrap_or_default();
        let file_name = export::notice_file_name(&template, Local::now().date_naive());
        document::perform(ui.ctx(), state, action, "Notice", &text, &file_name);
    }
}
