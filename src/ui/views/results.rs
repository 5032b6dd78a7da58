use crate::QuizApp;
use crate::ui::helpers::difficulty_color;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Align, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    // Sin resultados no hay nada que resumir: volvemos al selector
    let Some(results) = app.results() else {
        app.abrir_selector_nivel();
        return;
    };

    let mut levels = false;
    let mut retry = false;

    centered_panel(ctx, 320.0, 420.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.label(RichText::new("🏆").size(48.0));
            ui.heading("Challenge Complete!");
            ui.label(
                RichText::new(format!("{} Difficulty", results.difficulty.label()))
                    .color(difficulty_color(results.difficulty)),
            );
            ui.add_space(16.0);

            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(results.total.to_string())
                            .monospace()
                            .size(40.0)
                            .strong(),
                    );
                    ui.label(format!("out of {} points", results.maximum));
                });
            });

            ui.add_space(16.0);
            let width = ui.available_width().min(320.0);
            (levels, retry) = two_button_row(ui, width, ("⬅ Levels", true), ("⟲ Retry", true));
        });
    });

    if retry {
        app.reintentar_nivel();
    } else if levels {
        app.abrir_selector_nivel();
    }
}
