// src/results.rs

use crate::model::Difficulty;

/// Resumen al terminar todas las preguntas de un nivel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResults {
    pub difficulty: Difficulty,
    pub answered: usize,
    pub total: u32,
    /// Máximo nominal: no cuenta las bonificaciones por tiempo.
    pub maximum: u32,
}

impl QuizResults {
    pub fn summarize(difficulty: Difficulty, scores: &[u32], question_count: usize) -> Self {
        Self {
            difficulty,
            answered: scores.len(),
            total: total_score(scores),
            maximum: maximum_score(question_count, difficulty.base_points()),
        }
    }
}

pub fn total_score(scores: &[u32]) -> u32 {
    scores.iter().fold(0u32, |acc, s| acc.saturating_add(*s))
}

pub fn maximum_score(question_count: usize, base_points: u32) -> u32 {
    u32::try_from(question_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(base_points)
}
