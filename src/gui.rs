// Sovereign Navigator - gui.rs
//
// Top-level eframe::App implementation.
// Wires the navigation bar, status bar and view panels to the request
// manager: responses are applied before rendering, and requests queued by
// the views are dispatched after.

use crate::app::requests::RequestManager;
use crate::app::state::AppState;
use crate::core::model::Page;
use crate::ui;
use crate::util::constants::{MAX_RESPONSES_PER_FRAME, REQUEST_POLL_INTERVAL_MS};
use std::time::Duration;

/// The Sovereign Navigator application.
pub struct SovereignNavigatorApp {
    pub state: AppState,
    pub requests: RequestManager,
    api_base_url: String,
    font_size: f32,
    /// Theme last pushed to egui; re-applied when `state.dark_mode` changes.
    applied_dark_mode: Option<bool>,
}

impl SovereignNavigatorApp {
    pub fn new(
        mut state: AppState,
        requests: RequestManager,
        api_base_url: String,
        font_size: f32,
    ) -> Self {
        state.start();
        Self {
            state,
            requests,
            api_base_url,
            font_size,
            applied_dark_mode: None,
        }
    }

    fn dispatch_queued(&mut self) {
        for request in self.state.take_requests() {
            self.requests.dispatch(request);
        }
    }

    fn nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.horizontal_wrapped(|ui| {
                let mut target: Option<Page> = None;
                for page in Page::all() {
                    if ui
                        .selectable_label(self.state.page == *page, page.label())
                        .clicked()
                    {
                        target = Some(*page);
                    }
                }
                if let Some(page) = target {
                    self.state.navigate(page);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{24d8}").on_hover_text("About").clicked() {
                        self.state.show_about = true;
                    }
                    let theme_icon = if self.state.dark_mode {
                        "\u{2600}"
                    } else {
                        "\u{1f319}"
                    };
                    if ui
                        .button(theme_icon)
                        .on_hover_text("Toggle light/dark theme")
                        .clicked()
                    {
                        self.state.dark_mode = !self.state.dark_mode;
                    }
                });
            });
            ui.add_space(2.0);
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let in_flight = self.requests.in_flight();
                    if in_flight > 0 {
                        ui.spinner();
                        ui.label(format!("{in_flight} request(s) in flight"));
                        ui.separator();
                    }
                    ui.label(&self.state.status_message);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&self.api_base_url).small().weak());
                        if self.state.debug_mode {
                            ui.label(
                                egui::RichText::new("DEBUG")
                                    .small()
                                    .color(ui::theme::WARNING_TEXT),
                            );
                        }
                        if !self.state.warnings.is_empty() {
                            let label = egui::RichText::new(format!(
                                "\u{26a0} {} warning(s)",
                                self.state.warnings.len()
                            ))
                            .color(ui::theme::WARNING_TEXT);
                            let response = ui
                                .add(egui::Label::new(label).sense(egui::Sense::click()))
                                .on_hover_ui(|ui| {
                                    for warning in &self.state.warnings {
                                        ui.label(warning);
                                    }
                                    ui.small("Click to dismiss.");
                                });
                            if response.clicked() {
                                self.state.warnings.clear();
                            }
                        }
                    });
                });
            });
    }
}

impl eframe::App for SovereignNavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_dark_mode != Some(self.state.dark_mode) {
            ui::theme::apply(ctx, self.state.dark_mode, self.font_size);
            self.applied_dark_mode = Some(self.state.dark_mode);
        }

        for response in self.requests.poll(MAX_RESPONSES_PER_FRAME) {
            self.state.handle_response(response);
        }

        self.nav_bar(ctx);
        self.status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Dashboard => ui::panels::dashboard::render(ui, &mut self.state),
            Page::AffidavitForge => scrolled(ui, "affidavit_page", |ui| {
                ui::panels::affidavit::render(ui, &mut self.state)
            }),
            Page::BillEndorsement => ui::panels::bills::render(ui, &mut self.state),
            Page::ViolationTracker => scrolled(ui, "violations_page", |ui| {
                ui::panels::violations::render(ui, &mut self.state)
            }),
            Page::Profile => scrolled(ui, "profile_page", |ui| {
                ui::panels::profile::render(ui, &mut self.state)
            }),
            Page::NoticeGenerator => scrolled(ui, "notices_page", |ui| {
                ui::panels::notices::render(ui, &mut self.state)
            }),
            Page::DispatchTracker => scrolled(ui, "dispatch_page", |ui| {
                ui::panels::dispatch::render(ui, &mut self.state)
            }),
            Page::IntelligenceConsole => ui::panels::intelligence::render(ui, &mut self.state),
        });

        ui::panels::about::render(ctx, &mut self.state, &self.api_base_url);

        // Follow-ups from responses and clicks made this frame.
        self.dispatch_queued();

        if self.requests.in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(REQUEST_POLL_INTERVAL_MS));
        }
    }

    /// Saves the session so the next launch reopens the same view.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}

fn scrolled(ui: &mut egui::Ui, id: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::ScrollArea::vertical()
        .id_salt(id)
        .auto_shrink([false; 2])
        .show(ui, add_contents);
}
