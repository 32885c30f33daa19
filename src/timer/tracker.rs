use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::format::format_elapsed;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Start,
    Pause,
    Stop,
}

impl fmt::Display for TimerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerAction::Start => "start",
            TimerAction::Pause => "pause",
            TimerAction::Stop => "stop",
        };
        f.write_str(label)
    }
}

/// Result of a timer intent. Illegal intents are reported, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied {
        from: TimerStatus,
        to: TimerStatus,
    },
    Ignored {
        status: TimerStatus,
        action: TimerAction,
    },
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }
}

/// Tracked time released by a stop, to be added to a ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerCommit {
    seconds: u64,
}

impl TimerCommit {
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn hours(&self) -> f64 {
        self.seconds as f64 / SECONDS_PER_HOUR
    }
}

/// Identifies the live tick source. A fresh epoch is issued every time the
/// tracker enters `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickEpoch(u64);

#[derive(Debug, Clone, Copy)]
struct TickSource {
    epoch: TickEpoch,
    anchor: DateTime<Utc>,
}

/// Three-state stopwatch counting whole seconds while running.
///
/// Wall-clock time is the only time input. [`poll`](Self::poll) folds every
/// whole second elapsed since the anchor into the count and moves the anchor
/// by exactly that many seconds. A scheduled [`tick`](Self::tick) carries no
/// delta of its own: it is checked against the live epoch and then polls, so
/// a tick landing after a poll for the same second adds nothing.
#[derive(Debug, Clone, Default)]
pub struct ElapsedTimeTracker {
    status: TimerStatus,
    elapsed_seconds: u64,
    epochs_issued: u64,
    source: Option<TickSource>,
}

impl ElapsedTimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Elapsed seconds including whole seconds that are due at `now` but not
    /// yet polled. Does not mutate.
    pub fn elapsed_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        self.elapsed_seconds + self.pending_seconds(now)
    }

    pub fn formatted_at(&self, now: DateTime<Utc>) -> String {
        format_elapsed(self.elapsed_seconds_at(now))
    }

    /// Epoch of the live tick source, if running.
    pub fn epoch(&self) -> Option<TickEpoch> {
        self.source.map(|source| source.epoch)
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Transition {
        let from = self.status;
        if from == TimerStatus::Running {
            return self.ignore(TimerAction::Start);
        }
        self.arm(now);
        self.status = TimerStatus::Running;
        tracing::debug!(%from, elapsed = self.elapsed_seconds, "timer started");
        Transition::Applied {
            from,
            to: TimerStatus::Running,
        }
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Transition {
        if self.status != TimerStatus::Running {
            return self.ignore(TimerAction::Pause);
        }
        self.poll(now);
        self.disarm();
        self.status = TimerStatus::Paused;
        tracing::debug!(elapsed = self.elapsed_seconds, "timer paused");
        Transition::Applied {
            from: TimerStatus::Running,
            to: TimerStatus::Paused,
        }
    }

    /// Ends the run and releases the tracked time. Returns `None` when idle,
    /// in which case nothing changes.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<TimerCommit> {
        if self.status == TimerStatus::Idle {
            self.ignore(TimerAction::Stop);
            return None;
        }
        self.poll(now);
        self.disarm();
        let commit = TimerCommit {
            seconds: self.elapsed_seconds,
        };
        self.elapsed_seconds = 0;
        self.status = TimerStatus::Idle;
        tracing::debug!(seconds = commit.seconds, "timer stopped");
        Some(commit)
    }

    /// Folds every whole second elapsed since the anchor into the count and
    /// returns how many were added. The sub-second remainder stays pending.
    pub fn poll(&mut self, now: DateTime<Utc>) -> u64 {
        let due = self.pending_seconds(now);
        if due > 0 {
            self.advance(due, now);
        }
        due
    }

    /// Handles a tick scheduled by `epoch` at wall-clock time `now`. Ticks
    /// from a cancelled source are discarded and return `None`; otherwise the
    /// seconds folded in by the poll are returned.
    pub fn tick(&mut self, epoch: TickEpoch, now: DateTime<Utc>) -> Option<u64> {
        if self.status != TimerStatus::Running || self.epoch() != Some(epoch) {
            tracing::debug!(?epoch, status = %self.status, "stale tick discarded");
            return None;
        }
        Some(self.poll(now))
    }

    fn pending_seconds(&self, now: DateTime<Utc>) -> u64 {
        match (self.status, self.source) {
            (TimerStatus::Running, Some(source)) => {
                u64::try_from((now - source.anchor).num_seconds()).unwrap_or(0)
            }
            _ => 0,
        }
    }

    // `seconds` never exceeds the whole seconds between the anchor and a
    // clock reading, so the moved anchor never passes that reading.
    fn advance(&mut self, seconds: u64, now: DateTime<Utc>) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
        if let Some(source) = self.source.as_mut() {
            source.anchor = i64::try_from(seconds)
                .ok()
                .and_then(|step| source.anchor.checked_add_signed(Duration::seconds(step)))
                .unwrap_or(now);
        }
    }

    fn arm(&mut self, now: DateTime<Utc>) {
        self.epochs_issued += 1;
        self.source = Some(TickSource {
            epoch: TickEpoch(self.epochs_issued),
            anchor: now,
        });
    }

    fn disarm(&mut self) {
        self.source = None;
    }

    fn ignore(&self, action: TimerAction) -> Transition {
        tracing::debug!(%action, status = %self.status, "illegal timer transition ignored");
        Transition::Ignored {
            status: self.status,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::<Utc>::default() + Duration::seconds(seconds)
    }

    fn at_millis(millis: i64) -> DateTime<Utc> {
        DateTime::<Utc>::default() + Duration::milliseconds(millis)
    }

    #[test]
    fn counts_whole_seconds_while_running() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        assert_eq!(tracker.poll(at(5)), 5);
        assert_eq!(tracker.elapsed_seconds(), 5);
        assert_eq!(tracker.poll(at(5)), 0);
    }

    #[test]
    fn keeps_sub_second_remainder_while_running() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        tracker.poll(at_millis(1_500));
        assert_eq!(tracker.elapsed_seconds(), 1);
        tracker.poll(at_millis(2_000));
        assert_eq!(tracker.elapsed_seconds(), 2);
    }

    #[test]
    fn pause_drops_partial_second() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        tracker.pause(at_millis(2_900));
        assert_eq!(tracker.elapsed_seconds(), 2);
        tracker.start(at(10));
        tracker.poll(at_millis(10_200));
        assert_eq!(tracker.elapsed_seconds(), 2);
        tracker.poll(at(11));
        assert_eq!(tracker.elapsed_seconds(), 3);
    }

    #[test]
    fn stale_epoch_ticks_are_discarded() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        let first = tracker.epoch().unwrap();
        assert_eq!(tracker.tick(first, at(1)), Some(1));
        tracker.pause(at(1));
        assert_eq!(tracker.tick(first, at(2)), None);
        tracker.start(at(2));
        assert_eq!(tracker.tick(first, at(3)), None);
        let second = tracker.epoch().unwrap();
        assert_ne!(first, second);
        assert_eq!(tracker.tick(second, at(3)), Some(1));
        assert_eq!(tracker.elapsed_seconds(), 2);
    }

    #[test]
    fn tick_then_poll_counts_each_second_once() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        let epoch = tracker.epoch().unwrap();
        assert_eq!(tracker.tick(epoch, at(3)), Some(3));
        assert_eq!(tracker.poll(at(3)), 0);
        assert_eq!(tracker.poll(at(4)), 1);
        assert_eq!(tracker.elapsed_seconds(), 4);
    }

    #[test]
    fn poll_then_tick_counts_each_second_once() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        let epoch = tracker.epoch().unwrap();
        assert_eq!(tracker.poll(at_millis(1_010)), 1);
        assert_eq!(tracker.tick(epoch, at_millis(1_010)), Some(0));
        let commit = tracker.stop(at_millis(1_500)).unwrap();
        assert_eq!(commit.seconds(), 1);
    }

    #[test]
    fn late_ticks_catch_up_without_outrunning_the_clock() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        let epoch = tracker.epoch().unwrap();
        for _ in 0..3_000 {
            tracker.tick(epoch, at(10));
        }
        assert_eq!(tracker.elapsed_seconds(), 10);
        assert_eq!(tracker.poll(at(11)), 1);
    }

    #[test]
    fn far_future_reading_does_not_panic() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        let epoch = tracker.epoch().unwrap();
        let due = tracker.tick(epoch, DateTime::<Utc>::MAX_UTC).unwrap();
        assert!(due > 0);
        assert_eq!(tracker.poll(DateTime::<Utc>::MAX_UTC), 0);
        assert_eq!(tracker.elapsed_seconds(), due);
    }

    #[test]
    fn elapsed_at_does_not_mutate() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        assert_eq!(tracker.elapsed_seconds_at(at(7)), 7);
        assert_eq!(tracker.elapsed_seconds(), 0);
        assert_eq!(tracker.formatted_at(at(61)), "00:01:01");
    }

    #[test]
    fn clock_moving_backwards_adds_nothing() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(100));
        assert_eq!(tracker.poll(at(50)), 0);
        assert_eq!(tracker.elapsed_seconds(), 0);
    }

    #[test]
    fn commit_converts_to_hours() {
        let mut tracker = ElapsedTimeTracker::new();
        tracker.start(at(0));
        let commit = tracker.stop(at(5_400)).unwrap();
        assert_eq!(commit.seconds(), 5_400);
        assert_eq!(commit.hours(), 1.5);
        assert_eq!(tracker.status(), TimerStatus::Idle);
        assert_eq!(tracker.epoch(), None);
    }
}
