use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

const FEATURES: [(&str, &str); 4] = [
    ("🧩 Real C Code", "Debug actual C programs with real compiler errors"),
    ("🧠 3 Difficulty Levels", "From syntax fixes to memory management bugs"),
    ("🏆 Score & Compete", "Earn points based on speed and accuracy"),
    ("⚡ Instant Feedback", "See errors, hints, and expected output live"),
];

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    let mut start = false;

    centered_panel(ctx, 360.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🐞 Debug the Bug").size(32.0).strong());
            ui.add_space(8.0);
            ui.label("Sharpen your C programming skills by debugging real code.");
            ui.label("From missing semicolons to memory leaks, one bug at a time.");
            ui.add_space(18.0);

            egui::Grid::new("home_features")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for (title, desc) in FEATURES {
                        ui.label(RichText::new(title).strong());
                        ui.label(desc);
                        ui.end_row();
                    }
                });

            ui.add_space(20.0);
            start = ui
                .add_sized([240.0, 40.0], Button::new("▶ Start Debugging"))
                .clicked();
        });
    });

    if start {
        app.abrir_selector_nivel();
    }
}
