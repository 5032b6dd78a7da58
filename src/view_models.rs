// src/view_models.rs

use crate::model::Difficulty;

#[derive(Clone, Debug)]
pub struct TierInfo {
    pub difficulty: Difficulty,
    pub question_count: usize,
}

impl TierInfo {
    pub fn label(&self) -> String {
        self.difficulty.label().to_string()
    }

    pub fn count_label(&self) -> String {
        match self.question_count {
            1 => "🐞 1 question".to_string(),
            n => format!("🐞 {n} questions"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerUrgency {
    Calm,
    Warning,  // < 60 s
    Critical, // < 30 s
}

impl TimerUrgency {
    pub fn for_remaining(seconds: u32) -> Self {
        if seconds < 30 {
            TimerUrgency::Critical
        } else if seconds < 60 {
            TimerUrgency::Warning
        } else {
            TimerUrgency::Calm
        }
    }
}

/// `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn hint_button_label(revealed: usize, total: usize) -> String {
    format!("💡 Hint ({revealed}/{total})")
}

pub fn progress_label(index: usize, count: usize) -> String {
    format!("Q{}/{}", index + 1, count)
}
