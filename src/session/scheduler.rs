use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Scheduled<E> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    event: E,
}

/// Temporizadores cancelables sobre un reloj que avanza desde fuera
/// (el tiempo de egui en la app, valores fijos en los tests).
///
/// Los eventos vencidos se sacan de uno en uno con [`Scheduler::pop_due`], de
/// modo que una cancelación hecha al procesar un evento ya afecta al siguiente.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E: Clone> Scheduler<E> {
    pub fn new(now: Duration) -> Self {
        Self {
            now,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerId {
        self.push(delay, None, event)
    }

    /// Dispara cada `period`; un periodo nulo se trata como un disparo único.
    pub fn schedule_repeating(&mut self, period: Duration, event: E) -> TimerId {
        let period = (!period.is_zero()).then_some(period);
        self.push(period.unwrap_or_default(), period, event)
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: self.now + delay,
            period,
            event,
        });
        id
    }

    /// Devuelve `true` si el temporizador seguía pendiente.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        before != self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Instante del próximo disparo, si hay alguno.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Avanza el reloj hasta `now` y devuelve el evento vencido más antiguo.
    /// Los repetitivos se reprograman un periodo después de su vencimiento,
    /// así un salto largo de reloj los dispara varias veces seguidas.
    pub fn pop_due(&mut self, now: Duration) -> Option<E> {
        self.now = self.now.max(now);

        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= self.now)
            .min_by_key(|(_, s)| (s.due, s.id))
            .map(|(i, _)| i)?;

        match self.pending[idx].period {
            Some(period) => {
                let scheduled = &mut self.pending[idx];
                scheduled.due += period;
                Some(scheduled.event.clone())
            }
            None => Some(self.pending.swap_remove(idx).event),
        }
    }
}
