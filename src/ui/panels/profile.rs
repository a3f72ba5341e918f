// Sovereign Navigator - ui/panels/profile.rs
//
// Sovereign Profile: edit name, address, status and declarations.

use crate::app::state::AppState;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f451} Sovereign Profile");
    ui.add_space(8.0);

    if let Some(ref error) = state.profile.error {
        theme::error_label(ui, error);
    }

    let Some(profile) = state.profile.profile.as_mut() else {
        if state.profile.loading {
            ui.label("Loading profile...");
        }
        return;
    };

    let mut save = false;
    egui::Grid::new("profile_form")
        .num_columns(2)
        .min_col_width(theme::FORM_LABEL_WIDTH)
        .show(ui, |ui| {
            ui.label("Full name");
            ui.text_edit_singleline(&mut profile.full_name);
            ui.end_row();

            ui.label("Address");
            ui.text_edit_multiline(&mut profile.address);
            ui.end_row();

            ui.label("Status");
            let status = profile.status.get_or_insert_with(String::new);
            ui.text_edit_singleline(status);
            ui.end_row();

            ui.label("Declarations");
            ui.add(
                egui::TextEdit::multiline(&mut state.profile.declarations_text)
                    .desired_rows(6)
                    .hint_text("One declaration per line"),
            );
            ui.end_row();
        });

    ui.add_space(6.0);
    if ui.button("Save Profile").clicked() {
        save = true;
    }

    if save {
        state.save_profile();
    }
    if let Some(ref success) = state.profile.success {
        theme::success_label(ui, success);
    }
}
