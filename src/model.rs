use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Puntos base de cada pregunta del nivel (también usados para el máximo del resumen).
    pub fn base_points(self) -> u32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 200,
            Difficulty::Hard => 300,
        }
    }

    /// Segundos asignados a cada pregunta del nivel.
    pub fn time_limit(self) -> u32 {
        match self {
            Difficulty::Easy => 120,
            Difficulty::Medium => 180,
            Difficulty::Hard => 300,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Difficulty::Easy => {
                "Syntax errors, missing headers, and simple fixes. Perfect for beginners."
            }
            Difficulty::Medium => {
                "Pointer bugs, memory leaks, and logic errors. Test your intermediate skills."
            }
            Difficulty::Hard => {
                "Buffer overflows, dangling pointers, and subtle UB. Only for the brave."
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuizError::UnknownDifficulty(s.to_string()))
    }
}

/// Pregunta del banco. Inmutable una vez cargada.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub buggy_code: String,
    pub correct_code: String,
    #[serde(default)]
    pub hints: Vec<String>,
    pub expected_output: String,
    pub error_description: String,
    pub points: u32,
    pub time_limit: u32, // segundos
}

impl QuizQuestion {
    /// Puntos y tiempo coherentes con el nivel declarado.
    pub fn matches_tier(&self) -> bool {
        self.points == self.difficulty.base_points()
            && self.time_limit == self.difficulty.time_limit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    DifficultySelect,
    Debug,
    Results,
}
