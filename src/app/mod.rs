use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::model::AppState;
use crate::session::SessionController;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;

// Re-export de view models
pub use crate::view_models::TierInfo;

/// Clave de eframe para las preferencias guardadas.
pub const PREFS_KEY: &str = "debug_quiz_prefs";

/// Lo único que se guarda entre ejecuciones: las puntuaciones no.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Preferences {
    /// El tema del entorno manda sobre lo guardado; sin ninguno, tema oscuro.
    pub fn resolve(stored: Option<Preferences>, config: &AppConfig) -> Self {
        let mut prefs = stored.unwrap_or_default();
        if let Some(dark_mode) = config.dark_mode {
            prefs.dark_mode = dark_mode;
        }
        prefs
    }
}

pub struct QuizApp {
    pub bank: QuestionBank,
    pub config: AppConfig,
    pub prefs: Preferences,
    pub state: AppState,
    pub session: Option<SessionController>,
    pub message: String,
    /// Último instante de reloj recibido de la UI.
    clock: Duration,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, QuizError> {
        let bank = QuestionBank::embedded()?;
        if bank.is_empty() {
            log::warn!("El banco de preguntas está vacío");
        }
        let stored = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, PREFS_KEY));

        let mut app = Self::with_bank(bank, config);
        app.prefs = Preferences::resolve(stored, &app.config);
        app.apply_theme(&cc.egui_ctx);

        log::info!(
            "Banco de preguntas listo: {} preguntas",
            app.bank.all().len()
        );
        Ok(app)
    }

    pub fn with_bank(bank: QuestionBank, config: AppConfig) -> Self {
        let prefs = Preferences::resolve(None, &config);
        Self {
            bank,
            config,
            prefs,
            state: AppState::Home,
            session: None,
            message: String::new(),
            clock: Duration::ZERO,
        }
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        if self.prefs.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.prefs.dark_mode = dark_mode;
        self.apply_theme(ctx);
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Recibe el reloj de la UI y deja que la sesión procese lo que haya vencido.
    pub fn sync_clock(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
        if let Some(session) = self.session.as_mut() {
            session.advance_clock(self.clock);
        }
    }

    /// Cuánto esperar hasta el próximo repintado necesario.
    pub fn next_repaint_in(&self) -> Option<Duration> {
        self.session
            .as_ref()?
            .next_deadline()
            .map(|due| due.saturating_sub(self.clock))
    }
}
