// Sovereign Navigator - ui/panels/creditors.rs
//
// Creditor Matrix (list) and the Add Creditor form, both on the dashboard.

use crate::app::state::AppState;
use crate::core::model::ContactMethod;
use crate::ui::theme;

pub fn render_list(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("\u{1f3e6} Creditor Matrix");
    ui.add_space(4.0);

    let list = &state.creditors;
    if let Some(ref error) = list.error {
        theme::error_label(ui, error);
    }
    if list.loading && list.creditors.is_empty() {
        ui.label("Loading creditors...");
        return;
    }
    if list.creditors.is_empty() {
        ui.label("No creditors have been added yet.");
        return;
    }

    egui::Grid::new("creditor_matrix")
        .striped(true)
        .num_columns(4)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Address");
            ui.strong("Contact");
            ui.strong("Tags");
            ui.end_row();
            for creditor in &list.creditors {
                ui.label(&creditor.name);
                ui.label(&creditor.address);
                ui.label(creditor.contact_method.label());
                ui.label(creditor.tags.join(", "));
                ui.end_row();
            }
        });
}

pub fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{2795} Add Creditor");
    ui.add_space(4.0);

    let mut submit = false;
    {
        let form = &mut state.creditor_form.form;
        egui::Grid::new("creditor_form")
            .num_columns(2)
            .min_col_width(theme::FORM_LABEL_WIDTH)
            .show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Address");
                ui.text_edit_multiline(&mut form.address);
                ui.end_row();

                ui.label("Contact method");
                egui::ComboBox::from_id_salt("creditor_contact_method")
                    .selected_text(form.contact_method.label())
                    .show_ui(ui, |ui| {
                        for method in ContactMethod::all() {
                            ui.selectable_value(&mut form.contact_method, *method, method.label());
                        }
                    });
                ui.end_row();

                ui.label("Tags");
                ui.add(
                    egui::TextEdit::singleline(&mut form.tags)
                        .hint_text("original creditor, debt collector"),
                );
                ui.end_row();
            });
        if ui.button("Add Creditor").clicked() {
            submit = true;
        }
    }

    if submit {
        state.submit_creditor();
    }
    if let Some(ref error) = state.creditor_form.error {
        theme::error_label(ui, error);
    }
    if let Some(ref success) = state.creditor_form.success {
        theme::success_label(ui, success);
    }
}
