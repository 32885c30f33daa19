//! Stopwatch that accumulates labor time and hands it to the ledger on stop.

pub mod clock;
pub mod format;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_elapsed, format_hours, format_money};
pub use tracker::{
    ElapsedTimeTracker, TickEpoch, TimerAction, TimerCommit, TimerStatus, Transition,
};
