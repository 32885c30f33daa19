//! The in-process API the shell drives: intents in, display snapshots out.

use serde::Serialize;

use crate::{
    estimate::{parse_amount, Category, CostField, CostLedger, CostRecord, RecordUpdate},
    timer::{
        format_elapsed, Clock, ElapsedTimeTracker, TickEpoch, TimerCommit, TimerStatus, Transition,
    },
};

/// Everything a renderer needs after an intent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayState {
    pub category: Category,
    pub record: CostRecord,
    pub total: f64,
    pub timer_status: TimerStatus,
    pub elapsed_seconds: u64,
    pub elapsed_formatted: String,
}

/// Owns the ledger, the global stopwatch and the active category.
pub struct EstimatorSession {
    ledger: CostLedger,
    tracker: ElapsedTimeTracker,
    active: Category,
    clock: Box<dyn Clock>,
}

impl EstimatorSession {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::with_category(clock, Category::default())
    }

    pub fn with_category(clock: Box<dyn Clock>, active: Category) -> Self {
        Self {
            ledger: CostLedger::new(),
            tracker: ElapsedTimeTracker::new(),
            active,
            clock,
        }
    }

    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    pub fn tracker(&self) -> &ElapsedTimeTracker {
        &self.tracker
    }

    pub fn active_category(&self) -> Category {
        self.active
    }

    /// Switches the edited record. The timer keeps running untouched.
    pub fn select_category(&mut self, category: Category) {
        if self.active != category {
            tracing::debug!(from = %self.active, to = %category, "category selected");
        }
        self.active = category;
    }

    /// Parses `raw` and stores it in `field`. Returns the stored value.
    pub fn set_field(&mut self, category: Category, field: CostField, raw: &str) -> f64 {
        self.ledger
            .update_record(category, RecordUpdate::field(field, parse_amount(raw)));
        self.ledger.record(category).get(field)
    }

    pub fn update_record(&mut self, category: Category, update: RecordUpdate) {
        self.ledger.update_record(category, update);
    }

    pub fn timer_start(&mut self) -> Transition {
        let now = self.clock.now();
        self.tracker.start(now)
    }

    pub fn timer_pause(&mut self) -> Transition {
        let now = self.clock.now();
        self.tracker.pause(now)
    }

    /// Stops the timer and commits the tracked hours to the category active
    /// right now. `None` when the timer was idle.
    pub fn timer_stop(&mut self) -> Option<TimerCommit> {
        let now = self.clock.now();
        let commit = self.tracker.stop(now)?;
        self.ledger.add_labor_hours(self.active, commit.hours());
        tracing::info!(
            category = %self.active,
            seconds = commit.seconds(),
            hours = commit.hours(),
            "tracked time committed"
        );
        Some(commit)
    }

    /// Folds due wall-clock seconds into the timer. Call from the event loop.
    pub fn refresh(&mut self) -> u64 {
        let now = self.clock.now();
        self.tracker.poll(now)
    }

    /// Delivers a tick from the source tagged `epoch`. `None` when that
    /// source was cancelled by a pause or stop.
    pub fn tick(&mut self, epoch: TickEpoch) -> Option<u64> {
        let now = self.clock.now();
        self.tracker.tick(epoch, now)
    }

    pub fn display_state(&self) -> DisplayState {
        let record = *self.ledger.record(self.active);
        let elapsed_seconds = self.tracker.elapsed_seconds_at(self.clock.now());
        DisplayState {
            category: self.active,
            total: record.total(),
            record,
            timer_status: self.tracker.status(),
            elapsed_seconds,
            elapsed_formatted: format_elapsed(elapsed_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn session() -> (EstimatorSession, ManualClock) {
        let clock = ManualClock::default();
        (EstimatorSession::new(Box::new(clock.clone())), clock)
    }

    #[test]
    fn display_state_reflects_active_record() {
        let (mut session, _clock) = session();
        session.set_field(Category::Woodworking, CostField::MaterialCost, "100");
        session.set_field(Category::Woodworking, CostField::LaborHours, "2");
        session.set_field(Category::Woodworking, CostField::HourlyRate, "25");

        let state = session.display_state();
        assert_eq!(state.category, Category::Woodworking);
        assert_eq!(state.total, 150.0);
        assert_eq!(state.timer_status, TimerStatus::Idle);
        assert_eq!(state.elapsed_formatted, "00:00:00");
    }

    #[test]
    fn display_state_includes_due_seconds() {
        let (mut session, clock) = session();
        session.timer_start();
        clock.advance_secs(3661);
        let state = session.display_state();
        assert_eq!(state.elapsed_seconds, 3661);
        assert_eq!(state.elapsed_formatted, "01:01:01");
        assert_eq!(session.tracker().elapsed_seconds(), 0);
        assert_eq!(session.refresh(), 3661);
    }

    #[test]
    fn set_field_returns_coerced_value() {
        let (mut session, _clock) = session();
        assert_eq!(
            session.set_field(Category::Laser, CostField::HourlyRate, "abc"),
            0.0
        );
        assert_eq!(
            session.set_field(Category::Laser, CostField::HourlyRate, "35.5"),
            35.5
        );
    }
}
