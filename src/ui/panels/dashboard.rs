// Sovereign Navigator - ui/panels/dashboard.rs
//
// Dashboard: remedy loop indicator, timeline, Creditor Matrix and the
// creditor form.

use crate::app::state::AppState;
use crate::core::progress;
use crate::ui::panels::{creditors, timeline};
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_salt("dashboard")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            stage_loop(ui, state);
            ui.add_space(12.0);
            ui.separator();
            timeline::render(ui, state);
            ui.add_space(12.0);
            ui.separator();
            creditors::render_list(ui, state);
            ui.add_space(12.0);
            ui.separator();
            creditors::render_form(ui, state);
        });
}

/// The four-stage remedy loop with the "Simulate Next Stage" control.
fn stage_loop(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f504} Remedy Loop");
    ui.add_space(6.0);

    let completed = state.completed_stages();
    ui.horizontal_wrapped(|ui| {
        let stages = progress::stage_progress(&completed);
        let last = stages.len().saturating_sub(1);
        for (index, step) in stages.iter().enumerate() {
            let colour = theme::loop_stage_colour(step.completed, step.active);
            let mut text = egui::RichText::new(format!("{} {}", step.stage.symbol, step.stage.name))
                .color(colour);
            if step.active {
                text = text.strong().underline();
            }
            ui.label(text);
            if index < last {
                ui.label(egui::RichText::new("\u{2192}").weak());
            }
        }
    });

    ui.add_space(6.0);
    let next = progress::next_stage_to_simulate(&completed);
    let hover = next
        .map(|stage| format!("Log a system event for \"{}\"", stage.name))
        .unwrap_or_default();
    if ui
        .add_enabled(next.is_some(), egui::Button::new("\u{25b6} Simulate Next Stage"))
        .on_hover_text(hover)
        .on_disabled_hover_text("Every stage of the loop has been logged")
        .clicked()
    {
        state.simulate_next_stage();
    }
}
