// Sovereign Navigator - ui/panels/timeline.rs
//
// Remedy timeline: stage/actor filters, export controls, and the filtered
// event list (newest first).
//
// Export actions are collected while rendering and applied afterwards so
// `state` is not mutably borrowed while the event list is on screen.

use crate::app::exports;
use crate::app::state::AppState;
use crate::core::export;
use crate::core::model::{format_local_datetime, stage_icon, Actor, RemedyEvent, Stage};
use crate::ui::panels::document;
use crate::ui::theme;
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimelineExport {
    Text,
    Csv,
    Print,
}

/// Render the timeline section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f4dc} Remedy Timeline");
    ui.add_space(4.0);

    let mut requested: Option<TimelineExport> = None;

    ui.horizontal_wrapped(|ui| {
        ui.label("Stage:");
        let stage_text = state
            .timeline_filter
            .stage
            .as_deref()
            .and_then(Stage::from_tag)
            .map(|s| s.label())
            .unwrap_or("All");
        egui::ComboBox::from_id_salt("timeline_stage_filter")
            .selected_text(stage_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.timeline_filter.stage, None, "All");
                for stage in Stage::timeline_filter_options() {
                    ui.selectable_value(
                        &mut state.timeline_filter.stage,
                        Some(stage.tag().to_string()),
                        stage.label(),
                    );
                }
            });

        ui.label("Actor:");
        let actor_text = state
            .timeline_filter
            .actor
            .map(|a| a.label())
            .unwrap_or("All");
        egui::ComboBox::from_id_salt("timeline_actor_filter")
            .selected_text(actor_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.timeline_filter.actor, None, "All");
                for actor in Actor::all() {
                    ui.selectable_value(&mut state.timeline_filter.actor, Some(*actor), actor.label());
                }
            });

        if !state.timeline_filter.is_empty() && ui.small_button("Clear").clicked() {
            state.timeline_filter = Default::default();
        }

        ui.separator();
        if ui.button("Export TXT").clicked() {
            requested = Some(TimelineExport::Text);
        }
        if ui.button("Export CSV").clicked() {
            requested = Some(TimelineExport::Csv);
        }
        if ui.button("Export PDF").clicked() {
            requested = Some(TimelineExport::Print);
        }
    });

    ui.separator();

    if let Some(ref error) = state.remedy_log.error {
        theme::error_label(ui, error);
    }

    let events: Vec<RemedyEvent> = state.filtered_events().into_iter().cloned().collect();

    if let Some(kind) = requested {
        run_export(state, kind, &events);
    }

    if state.remedy_log.loading && state.remedy_log.events.is_empty() {
        ui.label("Loading remedy log...");
        return;
    }
    if state.remedy_log.events.is_empty() {
        ui.label("No remedy events recorded yet.");
        return;
    }
    if events.is_empty() {
        ui.label("No events match the current filters.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("timeline_events")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for event in &events {
                event_row(ui, event, state.dark_mode);
            }
        });
}

fn event_row(ui: &mut egui::Ui, event: &RemedyEvent, dark_mode: bool) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(stage_icon(&event.stage))
                .size(18.0)
                .color(theme::stage_colour(&event.stage)),
        );
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&event.action)
                    .strong()
                    .color(theme::text_colour(dark_mode)),
            );
            ui.horizontal(|ui| {
                ui.small(format_local_datetime(&event.timestamp));
                ui.small("\u{00b7}");
                ui.small(event.actor.label());
                ui.small("\u{00b7}");
                ui.small(
                    egui::RichText::new(event.stage.to_uppercase())
                        .color(theme::stage_colour(&event.stage)),
                );
                if let Some(ref url) = event.document_url {
                    ui.hyperlink_to("View document", url);
                }
            });
        });
    });
    ui.add_space(6.0);
}

fn run_export(state: &mut AppState, kind: TimelineExport, events: &[RemedyEvent]) {
    let refs: Vec<&RemedyEvent> = events.iter().collect();
    if refs.is_empty() {
        state.status_message = "Nothing to export.".to_string();
        return;
    }
    let today = Local::now().date_naive();

    match kind {
        TimelineExport::Text => {
            let Some(dest) = rfd::FileDialog::new()
                .add_filter("Text", &["txt"])
                .set_file_name(export::timeline_file_name(today))
                .save_file()
            else {
                return;
            };
            match exports::save_text(&dest, &export::timeline_plaintext(&refs)) {
                Ok(()) => {
                    state.status_message =
                        format!("Exported {} events to {}.", refs.len(), dest.display());
                }
                Err(e) => document::report_failure(state, "Timeline", e),
            }
        }
        TimelineExport::Csv => {
            let file_name = export::timeline_file_name(today).replace(".txt", ".csv");
            let Some(dest) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name(file_name)
                .save_file()
            else {
                return;
            };
            match exports::save_timeline_csv(&refs, &dest) {
                Ok(n) => state.status_message = format!("Exported {n} events to CSV."),
                Err(e) => document::report_failure(state, "Timeline", e),
            }
        }
        TimelineExport::Print => {
            let file_name = export::timeline_file_name(today).replace(".txt", ".html");
            let html = export::timeline_printable_html(&refs);
            match exports::open_printable(&state.exports_dir, &file_name, &html) {
                Ok(path) => {
                    state.status_message = format!("Opened {} for printing.", path.display());
                }
                Err(e) => document::report_failure(state, "Timeline", e),
            }
        }
    }
}
