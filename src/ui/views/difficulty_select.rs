use egui::{Align, Button, CentralPanel, Context, RichText};

use crate::QuizApp;
use crate::model::Difficulty;
use crate::ui::helpers::{big_list_button, difficulty_color};
use crate::view_models::TierInfo;

pub fn ui_difficulty_select(app: &mut QuizApp, ctx: &Context) {
    let infos: Vec<TierInfo> = app.tier_infos();
    let mut chosen: Option<Difficulty> = None;
    let mut back = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 460.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 36.0;

        let estimated_h = 140.0 + 130.0 * infos.len() as f32;
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("Choose Your Level");
                        ui.label("Select a difficulty to start debugging C programs");
                        ui.add_space(16.0);

                        for info in &infos {
                            ui.group(|ui| {
                                ui.set_width(content_width);
                                ui.label(
                                    RichText::new(info.label())
                                        .size(22.0)
                                        .strong()
                                        .color(difficulty_color(info.difficulty)),
                                );
                                ui.label(info.difficulty.blurb());
                                ui.label(info.count_label());
                                let enabled = info.question_count > 0;
                                if big_list_button(ui, "Start", content_width * 0.5, button_h, enabled) {
                                    chosen = Some(info.difficulty);
                                }
                            });
                            ui.add_space(8.0);
                        }

                        if !app.message.is_empty() {
                            ui.label(&app.message);
                        }

                        ui.add_space(12.0);
                        back = ui
                            .add_sized([content_width, button_h], Button::new("⬅ Back"))
                            .clicked();
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });

    if let Some(difficulty) = chosen {
        app.empezar_nivel(difficulty);
    } else if back {
        app.volver_al_inicio();
    }
}
