use egui::{CentralPanel, Color32, Context, Grid, RichText, ScrollArea};

use crate::QuizApp;
use crate::code_utils::c_syntax;
use crate::session::Status;
use crate::ui::helpers::{difficulty_color, output_color, status_header};
use crate::ui::layout::{code_editor_input, two_button_row};

pub fn ui_debug(app: &mut QuizApp, ctx: &Context) {
    // Copia de lo que se pinta, para poder mutar `app` después
    let Some(session) = app.session.as_ref() else {
        app.abrir_selector_nivel();
        return;
    };
    let (Some(state), Some(question)) = (session.state(), session.current_question()) else {
        return;
    };
    let difficulty = session.difficulty();
    let title = question.title.clone();
    let description = question.description.clone();
    let error_description = question.error_description.clone();
    let hints: Vec<String> = session.revealed_hints().to_vec();
    let status = state.status;
    let output = state.output.clone();
    let original_code = state.edited_code.clone();
    let breakdown = session.score_breakdown();

    let mut code = original_code.clone();
    let mut run = false;
    let mut submit = false;

    CentralPanel::default().show(ctx, |ui| {
        let panel_width = (ui.available_width() * 0.97).min(760.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_width(panel_width);

            // ---------- enunciado ----------
            ui.group(|ui| {
                ui.set_width(panel_width);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("⚠ {title}")).heading().strong());
                    ui.label(
                        RichText::new(difficulty.name())
                            .monospace()
                            .color(difficulty_color(difficulty)),
                    );
                });
                ui.label(&description);
                ui.label(
                    RichText::new(&error_description)
                        .monospace()
                        .color(Color32::LIGHT_RED),
                );
            });

            if !hints.is_empty() {
                ui.add_space(6.0);
                ui.group(|ui| {
                    ui.set_width(panel_width);
                    for hint in &hints {
                        ui.label(format!("💡 {hint}"));
                    }
                });
            }

            // ---------- editor ----------
            ui.add_space(6.0);
            ui.label(RichText::new("solution.c").monospace().color(Color32::GRAY));
            let font_id = egui::TextStyle::Monospace.resolve(ui.style());
            let line_height = ui.fonts(|f| f.row_height(&font_id));
            ui.add_enabled_ui(status != Status::Evaluating, |ui| {
                code_editor_input(
                    ui,
                    "solution_c",
                    panel_width,
                    18,
                    line_height,
                    c_syntax(),
                    &mut code,
                    360.0,
                );
            });

            // ---------- acciones ----------
            ui.add_space(6.0);
            let run_label = if status == Status::Evaluating {
                "⏳ Compiling..."
            } else {
                "▶ Run Code"
            };
            let submit_label = if status == Status::Correct {
                "Next Question ➡"
            } else {
                "📤 Submit"
            };
            (run, submit) = two_button_row(
                ui,
                panel_width,
                (run_label, status != Status::Evaluating),
                (submit_label, status == Status::Correct),
            );

            // ---------- salida ----------
            ui.add_space(6.0);
            ui.group(|ui| {
                ui.set_width(panel_width);
                ui.label(status_header(status));
                ui.add_space(4.0);
                let text = if output.is_empty() {
                    "Click 'Run Code' to compile and test your solution..."
                } else {
                    output.as_str()
                };
                ui.label(RichText::new(text).monospace().color(output_color(status)));
            });

            // ---------- puntuación ----------
            if let Some(b) = breakdown {
                ui.add_space(6.0);
                ui.group(|ui| {
                    ui.set_width(panel_width);
                    ui.label(RichText::new("Scoring").strong());
                    Grid::new("scoring_grid")
                        .num_columns(3)
                        .spacing([32.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new(b.base.to_string()).monospace().strong());
                            ui.label(
                                RichText::new(format!("+{}", b.time_bonus))
                                    .monospace()
                                    .color(Color32::LIGHT_GREEN),
                            );
                            ui.label(
                                RichText::new(format!("-{}", b.hint_penalty))
                                    .monospace()
                                    .color(Color32::LIGHT_RED),
                            );
                            ui.end_row();
                            ui.label("Base pts");
                            ui.label("Time bonus");
                            ui.label("Hint penalty");
                            ui.end_row();
                        });
                });
            }
        });
    });

    if code != original_code {
        app.editar_codigo(code);
    }
    if run {
        app.ejecutar_codigo();
    } else if submit {
        app.enviar_respuesta();
    }
}
