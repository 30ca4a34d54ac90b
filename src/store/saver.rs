use chrono::{DateTime, Duration, Utc};

/// Where the debounced save currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePhase {
    /// Nothing to persist
    Idle,
    /// A change was observed; the write fires once `deadline` passes
    Pending { deadline: DateTime<Utc> },
    /// The dual write is in flight
    Saving,
}

/// Explicit debounce state machine. A new change while Pending replaces the
/// deadline, so rapid edits coalesce and only the last state within a
/// window is ever written. Driven entirely by instants handed in from the
/// store's clock, so tests never wait on real time.
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    window: Duration,
    phase: SavePhase,
}

impl SaveScheduler {
    pub fn new(window: Duration) -> Self {
        SaveScheduler {
            window,
            phase: SavePhase::Idle,
        }
    }

    pub fn phase(&self) -> SavePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SavePhase::Idle
    }

    /// A state change arrived: arm (or re-arm) the timer at `now + window`
    pub fn note_change(&mut self, now: DateTime<Utc>) {
        self.phase = SavePhase::Pending {
            deadline: now + self.window,
        };
    }

    /// True when a pending deadline has elapsed
    pub fn due(&self, now: DateTime<Utc>) -> bool {
        matches!(self.phase, SavePhase::Pending { deadline } if now >= deadline)
    }

    /// Pending -> Saving
    pub fn begin(&mut self) {
        self.phase = SavePhase::Saving;
    }

    /// Saving -> Idle, regardless of write outcome
    pub fn settle(&mut self) {
        self.phase = SavePhase::Idle;
    }

    /// Drop a pending save without writing (hydration supersedes it)
    pub fn cancel(&mut self) {
        self.phase = SavePhase::Idle;
    }
}
