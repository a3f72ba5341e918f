// Sovereign Navigator - ui/panels/violations.rs
//
// FDCPA Tracker: log a collector violation and list those already logged.

use crate::app::state::AppState;
use crate::core::model::display_date;
use crate::ui::panels::statute::statute_hint;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{2696} FDCPA Violation Tracker");
    ui.add_space(8.0);

    form(ui, state);

    ui.add_space(12.0);
    ui.separator();
    ui.strong("Logged Violations");
    ui.add_space(4.0);

    if state.violations.loading && state.violations.violations.is_empty() {
        ui.label("Loading violations...");
        return;
    }
    if state.violations.violations.is_empty() {
        ui.label("No violations logged yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("violations")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("violations_grid")
                .striped(true)
                .num_columns(5)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Date");
                    ui.strong("Collector");
                    ui.strong("Type");
                    ui.strong("Statute");
                    ui.strong("Notes");
                    ui.end_row();
                    for v in &state.violations.violations {
                        ui.label(display_date(&v.date));
                        ui.label(&v.collector);
                        ui.label(&v.violation_type);
                        statute_hint(ui, &state.statutes, &v.statute_reference, &v.statute_reference);
                        ui.label(&v.notes);
                        ui.end_row();
                    }
                });
        });
}

fn form(ui: &mut egui::Ui, state: &mut AppState) {
    let mut submit = false;
    {
        let form = &mut state.violations.form;
        egui::Grid::new("violation_form")
            .num_columns(2)
            .min_col_width(theme::FORM_LABEL_WIDTH)
            .show(ui, |ui| {
                ui.label("Date");
                ui.add(egui::TextEdit::singleline(&mut form.date).hint_text("YYYY-MM-DD"));
                ui.end_row();

                ui.label("Collector");
                ui.text_edit_singleline(&mut form.collector);
                ui.end_row();

                ui.label("Violation type");
                ui.add(
                    egui::TextEdit::singleline(&mut form.violation_type)
                        .hint_text("e.g. Called after cease-and-desist"),
                );
                ui.end_row();

                ui.label("Statute reference");
                ui.add(
                    egui::TextEdit::singleline(&mut form.statute_reference)
                        .hint_text("e.g. 15usc1692c"),
                );
                ui.end_row();

                ui.label("Notes");
                ui.text_edit_multiline(&mut form.notes);
                ui.end_row();
            });
        if ui.button("Log Violation").clicked() {
            submit = true;
        }
    }

    if submit {
        state.submit_violation();
    }
    if let Some(ref error) = state.violations.error {
        theme::error_label(ui, error);
    }
}
