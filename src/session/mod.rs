//! Ciclo de una pregunta: editar, ejecutar (con latencia simulada), corregir,
//! puntuar y pasar a la siguiente del nivel.
//!
//! El estado de cada pregunta es un [`SessionState`] que se sustituye entero al
//! avanzar o reiniciar. Los temporizadores (segundero y fin de evaluación) viven
//! en un [`Scheduler`] propio y se cancelan en el mismo paso que descarta el
//! estado al que apuntan; además cada evento lleva la generación del estado que
//! lo programó y se ignora si ya no coincide.

pub mod scheduler;
pub mod scoring;

use std::time::Duration;

use crate::code_utils::is_correct;
use crate::model::{Difficulty, QuizQuestion};
use crate::results::QuizResults;
use scheduler::{Scheduler, TimerId};
use scoring::ScoreBreakdown;

/// Periodo del segundero.
pub const TICK: Duration = Duration::from_secs(1);

pub const TIME_UP_MESSAGE: &str = "⏱ Time's up!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncorrectReason {
    /// El código normalizado no coincide con la solución.
    Mismatch,
    /// Se agotó el tiempo mientras se editaba.
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Editing,
    Evaluating,
    Correct,
    Incorrect(IncorrectReason),
}

impl Status {
    pub fn is_incorrect(self) -> bool {
        matches!(self, Status::Incorrect(_))
    }
}

/// Estado de la pregunta actual.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub question_index: usize,
    pub edited_code: String,
    pub remaining_time: u32,
    pub hints_revealed: usize,
    pub status: Status,
    pub output: String,
}

impl SessionState {
    fn for_question(question_index: usize, question: &QuizQuestion) -> Self {
        Self {
            question_index,
            edited_code: question.buggy_code.clone(),
            remaining_time: question.time_limit,
            hints_revealed: 0,
            status: Status::Editing,
            output: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionEvent {
    Tick { generation: u64 },
    EvaluationDone { generation: u64 },
}

/// Resultado de enviar una respuesta correcta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Next { score: u32 },
    Finished { score: u32, results: QuizResults },
}

pub fn success_message(question: &QuizQuestion) -> String {
    format!("✓ Output: {}", question.expected_output)
}

pub fn failure_message(question: &QuizQuestion) -> String {
    format!(
        "✗ Compilation Error:\n{}\n\nYour code still has bugs. Try again!",
        question.error_description
    )
}

/// Intento de un nivel completo.
#[derive(Debug)]
pub struct SessionController {
    difficulty: Difficulty,
    questions: Vec<QuizQuestion>,
    evaluation_delay: Duration,
    scores: Vec<u32>,
    current: Option<SessionState>,
    generation: u64,
    scheduler: Scheduler<SessionEvent>,
    ticker: Option<TimerId>,
    evaluation: Option<TimerId>,
}

impl SessionController {
    pub fn new(
        difficulty: Difficulty,
        questions: Vec<QuizQuestion>,
        evaluation_delay: Duration,
        now: Duration,
    ) -> Self {
        log::info!(
            "Empieza sesión de nivel {} con {} preguntas",
            difficulty,
            questions.len()
        );
        let mut controller = Self {
            difficulty,
            questions,
            evaluation_delay,
            scores: Vec::new(),
            current: None,
            generation: 0,
            scheduler: Scheduler::new(now),
            ticker: None,
            evaluation: None,
        };
        controller.load_question(0);
        controller
    }

    // ---- lectura -------------------------------------------------------

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.current.as_ref()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current
            .as_ref()
            .and_then(|s| self.questions.get(s.question_index))
    }

    /// Índice de la pregunta actual; igual al número de preguntas al terminar.
    pub fn current_index(&self) -> usize {
        self.current
            .as_ref()
            .map_or(self.questions.len(), |s| s.question_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn output_message(&self) -> &str {
        self.current.as_ref().map_or("", |s| s.output.as_str())
    }

    pub fn revealed_hints(&self) -> &[String] {
        match (self.current.as_ref(), self.current_question()) {
            (Some(state), Some(q)) => &q.hints[..state.hints_revealed.min(q.hints.len())],
            _ => &[],
        }
    }

    /// Puntuación que daría la pregunta si se enviara ahora.
    pub fn score_breakdown(&self) -> Option<ScoreBreakdown> {
        let state = self.current.as_ref()?;
        let q = self.questions.get(state.question_index)?;
        Some(ScoreBreakdown::new(
            q.points,
            state.remaining_time,
            q.time_limit,
            state.hints_revealed,
        ))
    }

    /// Sólo hay resultados cuando se han agotado las preguntas.
    pub fn results(&self) -> Option<QuizResults> {
        self.is_finished().then(|| {
            QuizResults::summarize(self.difficulty, &self.scores, self.questions.len())
        })
    }

    /// Próximo instante en que el reloj cambiará algo.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    // ---- disparadores --------------------------------------------------

    /// Sustituye el código editado. Rechazado mientras se evalúa.
    pub fn edit_code(&mut self, text: impl Into<String>) -> bool {
        let Some(state) = self.current.as_mut() else {
            return false;
        };
        if state.status == Status::Evaluating {
            return false;
        }
        state.edited_code = text.into();
        if state.status != Status::Editing {
            self.resume_editing();
        }
        true
    }

    /// Lanza la "compilación": para el segundero y programa la corrección.
    pub fn request_run(&mut self) -> bool {
        let generation = self.generation;
        let Some(state) = self.current.as_mut() else {
            return false;
        };
        if state.status == Status::Evaluating {
            return false;
        }
        state.status = Status::Evaluating;
        state.output.clear();
        log::debug!("Evaluando pregunta {}", state.question_index + 1);

        self.stop_ticker();
        self.evaluation = Some(
            self.scheduler
                .schedule_once(self.evaluation_delay, SessionEvent::EvaluationDone { generation }),
        );
        true
    }

    /// Revela una pista más; fuera de rango no hace nada.
    pub fn request_hint(&mut self) -> bool {
        let Some(state) = self.current.as_mut() else {
            return false;
        };
        let Some(q) = self.questions.get(state.question_index) else {
            return false;
        };
        if state.hints_revealed >= q.hints.len() {
            return false;
        }
        state.hints_revealed += 1;
        log::debug!(
            "Pista {}/{} revelada en {}",
            state.hints_revealed,
            q.hints.len(),
            q.id
        );
        true
    }

    /// Anota la puntuación y pasa a la siguiente pregunta. Sólo desde `Correct`.
    pub fn submit_and_advance(&mut self) -> Option<Advance> {
        let state = self.current.as_ref()?;
        if state.status != Status::Correct {
            return None;
        }
        let q = self.questions.get(state.question_index)?;
        let score =
            ScoreBreakdown::new(q.points, state.remaining_time, q.time_limit, state.hints_revealed)
                .total();
        log::info!(
            "Pregunta {} resuelta: {} puntos ({} s restantes, {} pistas)",
            q.id,
            score,
            state.remaining_time,
            state.hints_revealed
        );

        let next = state.question_index + 1;
        self.scores.push(score);
        self.load_question(next);

        Some(match self.results() {
            Some(results) => {
                log::info!(
                    "Nivel {} completado: {} de {} puntos",
                    results.difficulty,
                    results.total,
                    results.maximum
                );
                Advance::Finished { score, results }
            }
            None => Advance::Next { score },
        })
    }

    /// Vuelve a empezar el nivel desde la primera pregunta.
    pub fn retry_session(&mut self) {
        log::info!("Reintento del nivel {}", self.difficulty);
        self.scores.clear();
        self.load_question(0);
    }

    /// Avanza el reloj y procesa, en orden, los eventos vencidos.
    pub fn advance_clock(&mut self, now: Duration) {
        while let Some(event) = self.scheduler.pop_due(now) {
            self.handle(event);
        }
    }

    // ---- internos ------------------------------------------------------

    fn load_question(&mut self, index: usize) {
        // Los temporizadores pertenecen siempre al estado que se descarta.
        self.scheduler.cancel_all();
        self.ticker = None;
        self.evaluation = None;
        self.generation += 1;

        self.current = self
            .questions
            .get(index)
            .map(|q| SessionState::for_question(index, q));
        if self.current.is_some() {
            self.resume_editing();
        }
    }

    /// Vuelve a `Editing` y rearma el segundero; sin tiempo, queda agotado.
    fn resume_editing(&mut self) {
        let Some(state) = self.current.as_mut() else {
            return;
        };
        if state.remaining_time == 0 {
            if state.status != Status::Incorrect(IncorrectReason::TimedOut) {
                state.status = Status::Incorrect(IncorrectReason::TimedOut);
                state.output = TIME_UP_MESSAGE.to_owned();
            }
            return;
        }
        state.status = Status::Editing;
        self.start_ticker();
    }

    fn start_ticker(&mut self) {
        if self.ticker.is_none() {
            let generation = self.generation;
            self.ticker = Some(
                self.scheduler
                    .schedule_repeating(TICK, SessionEvent::Tick { generation }),
            );
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(id) = self.ticker.take() {
            self.scheduler.cancel(id);
        }
    }

    fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Tick { generation } => {
                if generation != self.generation {
                    return;
                }
                let Some(state) = self.current.as_mut() else {
                    return;
                };
                if state.status != Status::Editing {
                    self.stop_ticker();
                    return;
                }
                state.remaining_time = state.remaining_time.saturating_sub(1);
                if state.remaining_time == 0 {
                    state.status = Status::Incorrect(IncorrectReason::TimedOut);
                    state.output = TIME_UP_MESSAGE.to_owned();
                    log::info!("Tiempo agotado en la pregunta {}", state.question_index + 1);
                    self.stop_ticker();
                }
            }
            SessionEvent::EvaluationDone { generation } => {
                if generation != self.generation {
                    return;
                }
                self.evaluation = None;
                let Some(state) = self.current.as_mut() else {
                    return;
                };
                if state.status != Status::Evaluating {
                    return;
                }
                let Some(q) = self.questions.get(state.question_index) else {
                    return;
                };
                if is_correct(&state.edited_code, &q.correct_code) {
                    state.status = Status::Correct;
                    state.output = success_message(q);
                } else {
                    state.status = Status::Incorrect(IncorrectReason::Mismatch);
                    state.output = failure_message(q);
                }
                log::debug!("Resultado de {}: {:?}", q.id, state.status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QuestionBank;

    const DELAY: Duration = Duration::from_millis(800);

    const E1_FIXED: &str = "#include <stdio.h>\n\nint main() {\n    printf(\"Hello, World!\\n\");\n    return 0;\n}";

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn tier(difficulty: Difficulty) -> Vec<QuizQuestion> {
        QuestionBank::embedded()
            .unwrap()
            .questions_for(difficulty)
            .into_iter()
            .cloned()
            .collect()
    }

    fn easy() -> SessionController {
        SessionController::new(Difficulty::Easy, tier(Difficulty::Easy), DELAY, secs(0))
    }

    fn status(c: &SessionController) -> Status {
        c.state().unwrap().status
    }

    fn remaining(c: &SessionController) -> u32 {
        c.state().unwrap().remaining_time
    }

    /// Escribe la solución, la ejecuta y espera a la corrección.
    fn solve_now(c: &mut SessionController, now: Duration) {
        let answer = c.current_question().unwrap().correct_code.clone();
        assert!(c.edit_code(answer));
        assert!(c.request_run());
        c.advance_clock(now + DELAY);
        assert_eq!(status(c), Status::Correct);
    }

    #[test]
    fn starts_on_the_first_buggy_snippet() {
        let c = easy();
        let state = c.state().unwrap();
        let q = c.current_question().unwrap();
        assert_eq!(q.id, "e1");
        assert_eq!(state.question_index, 0);
        assert_eq!(state.edited_code, q.buggy_code);
        assert_eq!(state.remaining_time, 120);
        assert_eq!(state.hints_revealed, 0);
        assert_eq!(state.status, Status::Editing);
        assert_eq!(c.output_message(), "");
    }

    #[test]
    fn timer_counts_down_while_editing() {
        let mut c = easy();
        c.advance_clock(ms(999));
        assert_eq!(remaining(&c), 120);
        c.advance_clock(ms(3500));
        assert_eq!(remaining(&c), 117);
    }

    #[test]
    fn unchanged_buggy_code_is_a_mismatch() {
        let mut c = easy();
        assert!(c.request_run());
        assert_eq!(status(&c), Status::Evaluating);

        c.advance_clock(ms(799));
        assert_eq!(status(&c), Status::Evaluating);

        c.advance_clock(DELAY);
        assert_eq!(status(&c), Status::Incorrect(IncorrectReason::Mismatch));
        assert!(
            c.output_message()
                .contains("error: expected ';' before 'return'")
        );
    }

    #[test]
    fn fixed_hello_world_is_correct() {
        let mut c = easy();
        assert!(c.edit_code(E1_FIXED));
        assert!(c.request_run());
        c.advance_clock(DELAY);
        assert_eq!(status(&c), Status::Correct);
        assert_eq!(c.output_message(), "✓ Output: Hello, World!");
    }

    #[test]
    fn evaluation_blocks_edits_and_reruns() {
        let mut c = easy();
        assert!(c.request_run());
        assert!(!c.request_run());
        assert!(!c.edit_code("whatever"));
        assert_eq!(c.state().unwrap().edited_code, c.current_question().unwrap().buggy_code);
        assert_eq!(c.output_message(), "");
    }

    #[test]
    fn timer_is_paused_outside_editing() {
        let mut c = easy();
        c.advance_clock(secs(2));
        assert_eq!(remaining(&c), 118);

        solve_now(&mut c, secs(2));
        c.advance_clock(secs(30));
        assert_eq!(remaining(&c), 118);

        // Editar invalida el resultado y reanuda el segundero.
        assert!(c.edit_code("int main() {}"));
        assert_eq!(status(&c), Status::Editing);
        // La salida anterior se mantiene hasta la próxima ejecución.
        assert_eq!(c.output_message(), "✓ Output: Hello, World!");
        c.advance_clock(secs(32));
        assert_eq!(remaining(&c), 116);
    }

    #[test]
    fn editing_after_a_mismatch_returns_to_editing() {
        let mut c = easy();
        c.request_run();
        c.advance_clock(DELAY);
        assert!(status(&c).is_incorrect());

        assert!(c.edit_code(E1_FIXED));
        assert_eq!(status(&c), Status::Editing);
    }

    #[test]
    fn running_out_of_time_fails_exactly_once() {
        let mut c = easy();
        c.advance_clock(secs(119));
        assert_eq!(remaining(&c), 1);
        assert_eq!(status(&c), Status::Editing);

        c.advance_clock(secs(120));
        assert_eq!(remaining(&c), 0);
        assert_eq!(status(&c), Status::Incorrect(IncorrectReason::TimedOut));
        assert_eq!(c.output_message(), TIME_UP_MESSAGE);
        assert_eq!(c.pending_timers(), 0);
        assert_eq!(c.next_deadline(), None);

        c.advance_clock(secs(1000));
        assert_eq!(remaining(&c), 0);
        assert_eq!(status(&c), Status::Incorrect(IncorrectReason::TimedOut));
    }

    #[test]
    fn edits_after_time_out_keep_the_time_out() {
        let mut c = easy();
        c.advance_clock(secs(120));
        assert!(c.edit_code(E1_FIXED));
        assert_eq!(status(&c), Status::Incorrect(IncorrectReason::TimedOut));
        assert_eq!(c.pending_timers(), 0);

        // Se puede seguir ejecutando; acierto tardío sin bonificación.
        assert!(c.request_run());
        c.advance_clock(secs(121));
        assert_eq!(status(&c), Status::Correct);
        assert_eq!(c.submit_and_advance(), Some(Advance::Next { score: 100 }));
    }

    #[test]
    fn hints_are_capped() {
        let mut c = easy();
        let revealed: Vec<bool> = (0..5).map(|_| c.request_hint()).collect();
        assert_eq!(revealed, [true, true, false, false, false]);
        assert_eq!(c.state().unwrap().hints_revealed, 2);
        assert_eq!(
            c.revealed_hints(),
            [
                "Look at the end of the printf line.".to_string(),
                "C statements must end with a semicolon.".to_string()
            ]
        );
    }

    #[test]
    fn hints_stay_revealed_across_edits_and_runs() {
        let mut c = easy();
        c.request_hint();
        c.edit_code("x");
        c.request_run();
        c.advance_clock(DELAY);
        assert_eq!(c.revealed_hints().len(), 1);
    }

    #[test]
    fn submit_requires_a_correct_answer() {
        let mut c = easy();
        assert_eq!(c.submit_and_advance(), None);
        c.request_run();
        assert_eq!(c.submit_and_advance(), None);
        c.advance_clock(DELAY);
        assert_eq!(c.submit_and_advance(), None);
        assert!(c.scores().is_empty());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn half_time_and_one_hint_scores_110() {
        let mut c = easy();
        c.advance_clock(secs(60));
        assert_eq!(remaining(&c), 60);
        assert!(c.request_hint());

        let preview = c.score_breakdown().unwrap();
        assert_eq!((preview.time_bonus, preview.hint_penalty), (25, 15));

        solve_now(&mut c, secs(60));
        assert_eq!(c.submit_and_advance(), Some(Advance::Next { score: 110 }));
        assert_eq!(c.scores(), [110]);
        assert_eq!(c.current_question().unwrap().id, "e2");
    }

    #[test]
    fn advancing_replaces_the_state_and_its_timers() {
        let mut c = easy();
        c.request_hint();
        solve_now(&mut c, secs(0));
        c.submit_and_advance();

        let state = c.state().unwrap();
        let q = c.current_question().unwrap();
        assert_eq!(state.question_index, 1);
        assert_eq!(state.edited_code, q.buggy_code);
        assert_eq!(state.remaining_time, q.time_limit);
        assert_eq!(state.hints_revealed, 0);
        assert_eq!(state.status, Status::Editing);
        // Sólo el segundero de la pregunta nueva.
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn perfect_easy_run_totals_750_out_of_500() {
        let mut c = easy();
        let mut now = secs(0);
        let mut advances = Vec::new();
        for _ in 0..5 {
            solve_now(&mut c, now);
            now += DELAY;
            advances.push(c.submit_and_advance());
        }
        let last = advances.pop().flatten();
        assert!(advances.iter().all(|a| matches!(a, Some(Advance::Next { score: 150 }))));

        let results = QuizResults::summarize(Difficulty::Easy, &[150; 5], 5);
        assert_eq!(last, Some(Advance::Finished { score: 150, results }));
        assert!(c.is_finished());
        assert_eq!(c.scores(), [150; 5]);
        let results = c.results().unwrap();
        assert_eq!((results.total, results.maximum), (750, 500));
        assert_eq!(c.pending_timers(), 0);
        assert_eq!(c.current_index(), 5);
    }

    #[test]
    fn finished_session_ignores_triggers() {
        let mut c = SessionController::new(Difficulty::Hard, Vec::new(), DELAY, secs(0));
        assert!(c.is_finished());
        assert!(!c.edit_code("x"));
        assert!(!c.request_run());
        assert!(!c.request_hint());
        assert_eq!(c.submit_and_advance(), None);
        let results = c.results().unwrap();
        assert_eq!((results.total, results.maximum), (0, 0));
    }

    #[test]
    fn retry_discards_scores_and_pending_evaluation() {
        let mut c = easy();
        solve_now(&mut c, secs(0));
        c.submit_and_advance();
        assert_eq!(c.scores().len(), 1);

        c.request_run();
        c.retry_session();
        assert!(c.scores().is_empty());
        assert_eq!(c.current_question().unwrap().id, "e1");

        // La evaluación pendiente no debe tocar el estado nuevo.
        c.advance_clock(secs(0) + DELAY + DELAY);
        assert_eq!(status(&c), Status::Editing);
        assert_eq!(c.output_message(), "");
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn zero_time_limit_starts_timed_out() {
        let mut q = tier(Difficulty::Easy).remove(0);
        q.time_limit = 0;
        let c = SessionController::new(Difficulty::Easy, vec![q], DELAY, secs(0));
        assert_eq!(status(&c), Status::Incorrect(IncorrectReason::TimedOut));
        assert_eq!(c.pending_timers(), 0);
    }
}
