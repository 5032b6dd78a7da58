use super::*;
use crate::session::Advance;

impl QuizApp {
    pub fn editar_codigo(&mut self, code: String) {
        if let Some(session) = self.session.as_mut() {
            session.edit_code(code);
        }
    }

    pub fn ejecutar_codigo(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.request_run();
        }
    }

    pub fn pedir_pista(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.request_hint();
        }
    }

    /// Envía la respuesta correcta; al agotar el nivel pasa al resumen.
    pub fn enviar_respuesta(&mut self) -> Option<Advance> {
        let advance = self.session.as_mut()?.submit_and_advance()?;
        if let Advance::Finished { .. } = advance {
            self.state = AppState::Results;
        }
        Some(advance)
    }

    /// "Retry" desde el resumen: mismo nivel, puntuaciones a cero.
    pub fn reintentar_nivel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.retry_session();
            self.message.clear();
            self.state = AppState::Debug;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::app;
    use super::*;
    use crate::model::Difficulty;
    use crate::session::Status;

    fn solve_current(app: &mut QuizApp) {
        let answer = app
            .session
            .as_ref()
            .and_then(|s| s.current_question())
            .map(|q| q.correct_code.clone())
            .unwrap();
        app.editar_codigo(answer);
        app.ejecutar_codigo();
        let now = app.clock() + app.config.evaluation_delay;
        app.sync_clock(now);
    }

    #[test]
    fn full_level_ends_on_results() {
        let mut app = app();
        app.empezar_nivel(Difficulty::Hard);

        for _ in 0..4 {
            solve_current(&mut app);
            assert!(matches!(app.enviar_respuesta(), Some(Advance::Next { .. })));
            assert_eq!(app.state, AppState::Debug);
        }
        solve_current(&mut app);
        assert!(matches!(
            app.enviar_respuesta(),
            Some(Advance::Finished { score: 350, .. })
        ));
        assert_eq!(app.state, AppState::Results);

        let results = app.results().unwrap();
        assert_eq!(results.total, 5 * 350);
        assert_eq!(results.maximum, 1500);
    }

    #[test]
    fn retry_goes_back_to_the_first_question() {
        let mut app = app();
        app.empezar_nivel(Difficulty::Easy);
        solve_current(&mut app);
        app.enviar_respuesta();

        app.reintentar_nivel();
        let session = app.session.as_ref().unwrap();
        assert_eq!(app.state, AppState::Debug);
        assert!(session.scores().is_empty());
        assert_eq!(session.current_question().unwrap().id, "e1");
    }

    #[test]
    fn submitting_a_wrong_answer_does_nothing() {
        let mut app = app();
        app.empezar_nivel(Difficulty::Easy);
        app.ejecutar_codigo();
        let now = app.clock() + app.config.evaluation_delay;
        app.sync_clock(now);

        assert_eq!(app.enviar_respuesta(), None);
        let session = app.session.as_ref().unwrap();
        assert!(session.state().unwrap().status.is_incorrect());
        assert_ne!(session.state().unwrap().status, Status::Correct);
    }

    #[test]
    fn hint_requests_without_session_are_ignored() {
        let mut app = app();
        app.pedir_pista();
        app.ejecutar_codigo();
        app.editar_codigo("x".into());
        assert_eq!(app.enviar_respuesta(), None);
        assert!(app.session.is_none());
    }
}
