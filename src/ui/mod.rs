mod helpers;
pub mod layout;
pub mod views;

use std::time::Duration;

use crate::app::{PREFS_KEY, QuizApp};
use crate::model::AppState;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, debug_top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj de egui: hace avanzar segundero y evaluación pendientes
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        self.sync_clock(now);
        if let Some(wait) = self.next_repaint_in() {
            ctx.request_repaint_after(wait);
        }

        // BARRA SUPERIOR (solo durante una pregunta)
        if matches!(self.state, AppState::Debug) {
            debug_top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::DifficultySelect => views::difficulty_select::ui_difficulty_select(self, ctx),
            AppState::Debug => views::debug::ui_debug(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, PREFS_KEY, &self.prefs);
    }
}
