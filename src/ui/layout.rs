use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

use crate::QuizApp;
use crate::ui::helpers::urgency_color;
use crate::view_models::{TimerUrgency, format_time, hint_button_label, progress_label};

/// Barra superior de la pregunta: volver, progreso, reloj y pistas.
pub fn debug_top_panel(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(state) = session.state() else {
        return;
    };
    let hint_total = session.current_question().map_or(0, |q| q.hints.len());
    let hints_revealed = state.hints_revealed;
    let remaining = state.remaining_time;
    let progress = progress_label(state.question_index, session.question_count());

    let mut back = false;
    let mut hint = false;

    egui::TopBottomPanel::top("debug_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            back = ui.button("⬅ Back").clicked();

            ui.add_space(16.0);
            ui.label(RichText::new(progress).monospace());
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("⏱ {}", format_time(remaining)))
                    .monospace()
                    .color(urgency_color(TimerUrgency::for_remaining(remaining))),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                hint = ui
                    .add_enabled(
                        hints_revealed < hint_total,
                        Button::new(hint_button_label(hints_revealed, hint_total)),
                    )
                    .clicked();
            });
        });
    });

    if back {
        app.abrir_selector_nivel();
    } else if hint {
        app.pedir_pista();
    }
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.set_dark_mode(ctx, true);
            }
            if ui.button("☀ Light mode").clicked() {
                app.set_dark_mode(ctx, false);
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Editor de entrada con ancho fijo
#[allow(clippy::too_many_arguments)]
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    fontsize: f32,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) {
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
