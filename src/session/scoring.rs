/// Bonificación máxima por tiempo (tiempo restante completo).
pub const TIME_BONUS_MAX: u32 = 50;
/// Penalización por cada pista revelada.
pub const HINT_PENALTY: u32 = 15;

/// Desglose de la puntuación de una pregunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    pub hint_penalty: u32,
}

impl ScoreBreakdown {
    pub fn new(base: u32, remaining_time: u32, time_limit: u32, hints_revealed: usize) -> Self {
        Self {
            base,
            time_bonus: time_bonus(remaining_time, time_limit),
            hint_penalty: hint_penalty(hints_revealed),
        }
    }

    /// `max(0, base + bonus - penalización)`
    pub fn total(&self) -> u32 {
        self.base
            .saturating_add(self.time_bonus)
            .saturating_sub(self.hint_penalty)
    }
}

/// `floor(restante / límite * 50)`, sin pasar nunca de 50.
pub fn time_bonus(remaining_time: u32, time_limit: u32) -> u32 {
    if time_limit == 0 {
        return 0;
    }
    let remaining = u64::from(remaining_time.min(time_limit));
    (remaining * u64::from(TIME_BONUS_MAX) / u64::from(time_limit)) as u32
}

pub fn hint_penalty(hints_revealed: usize) -> u32 {
    u32::try_from(hints_revealed)
        .unwrap_or(u32::MAX)
        .saturating_mul(HINT_PENALTY)
}
