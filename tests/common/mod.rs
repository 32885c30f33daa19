use fabcost::{session::EstimatorSession, timer::ManualClock};

/// A session driven by a manual clock, plus the handle that advances it.
pub fn manual_session() -> (EstimatorSession, ManualClock) {
    let clock = ManualClock::default();
    let session = EstimatorSession::new(Box::new(clock.clone()));
    (session, clock)
}
