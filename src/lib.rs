#![doc(test(attr(deny(warnings))))]

//! fabcost estimates the cost of small fabrication jobs: per-category
//! material and labor inputs plus a stopwatch that folds tracked time into
//! labor hours.

pub mod cli;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod session;
pub mod timer;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("fabcost tracing initialized.");
    });
}
