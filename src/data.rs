// src/data.rs

use std::collections::HashSet;

use crate::error::QuizError;
use crate::model::{Difficulty, QuizQuestion};

/// Banco de preguntas inmutable, en el orden en que se declaran en el YAML.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Carga el banco embebido en el binario.
    pub fn embedded() -> Result<Self, QuizError> {
        let file_content = include_str!("data/questions.yaml");
        Self::from_yaml_str(file_content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, QuizError> {
        let questions: Vec<QuizQuestion> = serde_yaml::from_str(content)?;
        Self::from_questions(questions)
    }

    pub fn from_questions(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                return Err(QuizError::DuplicateId(q.id.clone()));
            }
            // Sólo aviso: la coherencia nivel/puntos/tiempo no se impone.
            if !q.matches_tier() {
                log::warn!(
                    "La pregunta {} ({}) tiene {} puntos y {} s, no coinciden con su nivel",
                    q.id,
                    q.difficulty,
                    q.points,
                    q.time_limit
                );
            }
        }

        let bank = Self { questions };
        for difficulty in Difficulty::ALL {
            log::debug!(
                "Banco cargado: {} preguntas de nivel {}",
                bank.count_for(difficulty),
                difficulty
            );
        }
        Ok(bank)
    }

    /// Preguntas de un nivel, conservando el orden de declaración.
    pub fn questions_for(&self, difficulty: Difficulty) -> Vec<&QuizQuestion> {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect()
    }

    /// Igual que `questions_for` pero a partir del nombre del nivel.
    /// Un nombre desconocido devuelve una lista vacía.
    pub fn questions_for_name(&self, tier: &str) -> Vec<&QuizQuestion> {
        match tier.parse::<Difficulty>() {
            Ok(difficulty) => self.questions_for(difficulty),
            Err(_) => Vec::new(),
        }
    }

    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .count()
    }

    pub fn all(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
