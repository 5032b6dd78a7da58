use super::*;
use crate::model::Difficulty;
use crate::results::QuizResults;

impl QuizApp {
    /// Una tarjeta por nivel, con el número de preguntas disponibles.
    pub fn tier_infos(&self) -> Vec<TierInfo> {
        Difficulty::ALL
            .into_iter()
            .map(|difficulty| TierInfo {
                difficulty,
                question_count: self.bank.count_for(difficulty),
            })
            .collect()
    }

    pub fn results(&self) -> Option<QuizResults> {
        self.session.as_ref()?.results()
    }
}
