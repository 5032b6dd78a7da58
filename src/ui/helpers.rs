// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

use crate::model::Difficulty;
use crate::session::Status;
use crate::view_models::TimerUrgency;

pub const ORANGE: Color32 = Color32::from_rgb(255, 150, 40);

pub fn big_list_button(ui: &mut Ui, label: impl Into<String>, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label.into()).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::LIGHT_GREEN,
        Difficulty::Medium => ORANGE,
        Difficulty::Hard => Color32::LIGHT_RED,
    }
}

pub fn urgency_color(urgency: TimerUrgency) -> Color32 {
    match urgency {
        TimerUrgency::Calm => Color32::LIGHT_GREEN,
        TimerUrgency::Warning => ORANGE,
        TimerUrgency::Critical => Color32::LIGHT_RED,
    }
}

/// Cabecera del panel de salida según el estado.
pub fn status_header(status: Status) -> RichText {
    match status {
        Status::Correct => RichText::new("✅ Compilation Successful").color(Color32::LIGHT_GREEN),
        Status::Incorrect(_) => RichText::new("❌ Error").color(Color32::LIGHT_RED),
        Status::Evaluating => RichText::new("⏳ Compiling...").color(Color32::GRAY),
        Status::Editing => RichText::new("Terminal Output").color(Color32::GRAY),
    }
}

pub fn output_color(status: Status) -> Color32 {
    match status {
        Status::Correct => Color32::LIGHT_GREEN,
        Status::Incorrect(_) => Color32::LIGHT_RED,
        _ => Color32::GRAY,
    }
}
