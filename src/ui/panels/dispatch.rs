// Sovereign Navigator - ui/panels/dispatch.rs
//
// Dispatch Tracker: mailed documents, their resolved notice status, status
// updates, and affidavit-of-mailing generation for notices.

use crate::app::state::AppState;
use crate::core::model::{display_datetime, DispatchStatus};
use crate::ui::panels::document;
use crate::ui::theme;
use crate::util::constants::AFFIDAVIT_OF_MAILING_FILE_NAME;

enum DispatchAction {
    SetStatus(String, DispatchStatus),
    MailingAffidavit(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f4ee} Dispatch Tracker");
    ui.add_space(8.0);

    if let Some(ref error) = state.dispatch.error {
        theme::error_label(ui, error);
    }

    if state.dispatch.loading && state.dispatch.dispatches.is_empty() {
        ui.label("Loading dispatches...");
    } else if state.dispatch.dispatches.is_empty() {
        ui.label("No dispatches recorded yet.");
    } else {
        let mut action: Option<DispatchAction> = None;
        egui::ScrollArea::horizontal()
            .id_salt("dispatch_table")
            .show(ui, |ui| {
                egui::Grid::new("dispatch_grid")
                    .striped(true)
                    .num_columns(9)
                    .spacing([14.0, 6.0])
                    .show(ui, |ui| {
                        for header in [
                            "Document",
                            "Document ID",
                            "Method",
                            "Tracking",
                            "Sent",
                            "Delivered",
                            "Responded",
                            "Status",
                            "",
                        ] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for d in &state.dispatch.dispatches {
                            ui.label(&d.document_type);
                            ui.monospace(&d.document_id);
                            ui.label(&d.dispatch_method);
                            ui.label(d.tracking_number.as_deref().unwrap_or("\u{2014}"));
                            ui.label(display_datetime(&d.sent_at));
                            ui.label(d.delivered_at.as_deref().map(display_datetime).unwrap_or_default());
                            ui.label(d.responded_at.as_deref().map(display_datetime).unwrap_or_default());
                            ui.label(
                                egui::RichText::new(d.status_label())
                                    .color(theme::dispatch_status_colour(d.status_label())),
                            );
                            ui.horizontal(|ui| {
                                ui.menu_button("Set status", |ui| {
                                    for status in DispatchStatus::all() {
                                        if ui.button(status.as_str()).clicked() {
                                            action = Some(DispatchAction::SetStatus(
                                                d.id.clone(),
                                                *status,
                                            ));
                                            ui.close_menu();
                                        }
                                    }
                                });
                                if d.is_notice() && ui.button("Affidavit of Mailing").clicked() {
                                    action = Some(DispatchAction::MailingAffidavit(d.id.clone()));
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

        match action {
            Some(DispatchAction::SetStatus(id, status)) => {
                state.change_dispatch_status(&id, status);
            }
            Some(DispatchAction::MailingAffidavit(id)) => state.generate_mailing_affidavit(&id),
            None => {}
        }
    }

    let Some(text) = state.dispatch.affidavit_preview.clone() else {
        return;
    };
    ui.add_space(10.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.strong("Affidavit of Mailing");
        if ui.small_button("Close").clicked() {
            state.dispatch.affidavit_preview = None;
        }
    });
    document::preview(ui, "mailing_affidavit_preview", &text);
    if let Some(action) = document::action_buttons(ui) {
        document::perform(
            ui.ctx(),
            state,
            action,
            "Affidavit of Mailing",
            &text,
            AFFIDAVIT_OF_MAILING_FILE_NAME,
        );
    }
}
