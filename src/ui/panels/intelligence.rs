// Sovereign Navigator - ui/panels/intelligence.rs
//
// Intelligence Console: backend suggestions with a category filter,
// "Act Now" navigation and dismissal.

use crate::app::state::AppState;
use crate::core::model::{Page, SuggestionId};
use crate::core::suggestion;
use crate::ui::theme;

enum SuggestionAction {
    Open(Page),
    Dismiss(SuggestionId),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f9e0} Intelligence Console");
    ui.add_space(8.0);

    if let Some(ref error) = state.intelligence.error {
        theme::error_label(ui, error);
    }
    if state.intelligence.loading && state.intelligence.suggestions.is_empty() {
        ui.label("Loading suggestions...");
        return;
    }
    if state.intelligence.suggestions.is_empty() {
        ui.label("No suggestions at this time. All clear, sovereign.");
        return;
    }

    let categories = suggestion::categories(&state.intelligence.suggestions);
    ui.horizontal(|ui| {
        ui.label("Category:");
        egui::ComboBox::from_id_salt("suggestion_category")
            .selected_text(state.intelligence.filter.clone())
            .show_ui(ui, |ui| {
                for category in &categories {
                    ui.selectable_value(
                        &mut state.intelligence.filter,
                        category.clone(),
                        category,
                    );
                }
            });
    });
    ui.add_space(6.0);

    let mut action: Option<SuggestionAction> = None;
    egui::ScrollArea::vertical()
        .id_salt("suggestions")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for s in state.visible_suggestions() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(s.kind.icon()).size(20.0));
                        ui.vertical(|ui| {
                            ui.strong(&s.category);
                            ui.label(&s.message);
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Dismiss").clicked() {
                                action = Some(SuggestionAction::Dismiss(s.id.clone()));
                            }
                            if let Some(page) = s.action {
                                if ui.button("Act Now").clicked() {
                                    action = Some(SuggestionAction::Open(page));
                                }
                            }
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });

    match action {
        Some(SuggestionAction::Open(page)) => state.navigate(page),
        Some(SuggestionAction::Dismiss(id)) => state.dismiss_suggestion(&id),
        None => {}
    }
}
