// Sovereign Navigator - ui/theme.rs
//
// Colour scheme, stage/status colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Stage;
use egui::Color32;

/// Accent colour for a stage tag. Unknown tags are neutral grey.
pub fn stage_colour(tag: &str) -> Color32 {
    match Stage::from_tag(tag) {
        Some(Stage::Notice) => Color32::from_rgb(59, 130, 246), // Blue 500
        Some(Stage::Response) => Color32::from_rgb(14, 165, 233), // Sky 500
        Some(Stage::Rebuttal) => Color32::from_rgb(217, 119, 6), // Amber 600
        Some(Stage::Affidavit) => Color32::from_rgb(147, 51, 234), // Purple 600
        Some(Stage::Endorsement) => Color32::from_rgb(22, 163, 74), // Green 600
        Some(Stage::Violation) => Color32::from_rgb(220, 38, 38), // Red 600
        None => Color32::from_rgb(107, 114, 128),               // Gray 500
    }
}

/// Colour for a resolved dispatch status string.
pub fn dispatch_status_colour(status: &str) -> Color32 {
    match status {
        "draft" => Color32::from_rgb(107, 114, 128),
        "sent" => Color32::from_rgb(59, 130, 246),
        "delivered" => Color32::from_rgb(22, 163, 74),
        "responded" => Color32::from_rgb(147, 51, 234),
        _ => Color32::from_rgb(156, 163, 175), // Gray 400
    }
}

/// Loop stage indicator colours.
pub fn loop_stage_colour(completed: bool, active: bool) -> Color32 {
    if completed {
        Color32::from_rgb(22, 163, 74)
    } else if active {
        Color32::from_rgb(234, 179, 8) // Yellow 500
    } else {
        Color32::from_rgb(75, 85, 99) // Gray 600
    }
}

/// Foreground for body text, legible on either background.
pub fn text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(243, 244, 246)
    } else {
        Color32::from_rgb(17, 24, 39)
    }
}

pub const ERROR_TEXT: Color32 = Color32::from_rgb(239, 68, 68); // Red 500
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500
pub const WARNING_TEXT: Color32 = Color32::from_rgb(245, 158, 11); // Amber 500

/// Layout constants.
pub const NAV_WIDTH: f32 = 190.0;
pub const FORM_LABEL_WIDTH: f32 = 130.0;
pub const DOCUMENT_PREVIEW_ROWS: usize = 18;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Apply theme and base font size to the context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.45,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}

/// Error line in the view's standard error colour.
pub fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.label(egui::RichText::new(message).color(ERROR_TEXT));
}

pub fn success_label(ui: &mut egui::Ui, message: &str) {
    ui.label(egui::RichText::new(message).color(SUCCESS_TEXT));
}
