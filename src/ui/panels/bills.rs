// Sovereign Navigator - ui/panels/bills.rs
//
// Bill Endorsement: monthly bills with an Endorse action for pending ones.

use crate::app::state::AppState;
use crate::core::model::display_date;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f4b8} Bill Endorsement");
    ui.add_space(8.0);

    if let Some(ref error) = state.bills.error {
        theme::error_label(ui, error);
    }
    if state.bills.loading && state.bills.bills.is_empty() {
        ui.label("Loading bills...");
        return;
    }
    if state.bills.bills.is_empty() {
        ui.label("No monthly bills found. Add one to get started.");
        return;
    }

    let mut endorse: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("bills")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("bills_grid")
                .striped(true)
                .num_columns(6)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Due");
                    ui.strong("Creditor");
                    ui.strong("Amount");
                    ui.strong("Status");
                    ui.strong("Notes");
                    ui.strong("");
                    ui.end_row();

                    for bill in &state.bills.bills {
                        ui.label(display_date(&bill.due_date));
                        let creditor = state
                            .creditors
                            .get(&bill.creditor_id)
                            .map(|c| c.name.as_str())
                            .unwrap_or(&bill.creditor_id);
                        ui.label(creditor);
                        ui.label(bill.amount_label());
                        ui.label(&bill.status);
                        ui.label(bill.notes.as_deref().unwrap_or(""));
                        if bill.is_pending() {
                            if ui.button("Endorse").clicked() {
                                endorse = Some(bill.id.clone());
                            }
                        } else {
                            match (&bill.endorsement_date, &bill.document_url) {
                                (_, Some(url)) => {
                                    ui.hyperlink_to("Endorsed document", url);
                                }
                                (Some(date), None) => {
                                    ui.label(format!("Endorsed {}", display_date(date)));
                                }
                                (None, None) => {
                                    ui.label("");
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(id) = endorse {
        state.endorse_bill(&id);
    }
}
