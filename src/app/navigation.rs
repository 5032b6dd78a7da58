use super::*;
use crate::model::Difficulty;

impl QuizApp {
    pub fn abrir_selector_nivel(&mut self) {
        self.descartar_sesion();
        self.message.clear();
        self.state = AppState::DifficultySelect;
    }

    pub fn volver_al_inicio(&mut self) {
        self.descartar_sesion();
        self.message.clear();
        self.state = AppState::Home;
    }

    /// Arranca una sesión nueva del nivel, reemplazando cualquier otra.
    pub fn empezar_nivel(&mut self, difficulty: Difficulty) {
        self.descartar_sesion();

        let questions: Vec<_> = self
            .bank
            .questions_for(difficulty)
            .into_iter()
            .cloned()
            .collect();
        if questions.is_empty() {
            log::warn!("El nivel {difficulty} no tiene preguntas");
            self.message = format!("No questions available for {}.", difficulty.label());
            self.state = AppState::DifficultySelect;
            return;
        }

        self.session = Some(SessionController::new(
            difficulty,
            questions,
            self.config.evaluation_delay,
            self.clock,
        ));
        self.message.clear();
        self.state = AppState::Debug;
    }

    /// Al soltar el controlador se sueltan también sus temporizadores.
    fn descartar_sesion(&mut self) {
        if let Some(session) = self.session.take() {
            if !session.is_finished() {
                log::info!(
                    "Sesión de nivel {} abandonada en la pregunta {}",
                    session.difficulty(),
                    session.current_index() + 1
                );
            }
        }
    }
}
