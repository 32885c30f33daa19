//! Per-category cost inputs and the ledger that isolates them.

pub mod category;
pub mod ledger;
pub mod record;

pub use category::{Category, CategoryProfile};
pub use ledger::CostLedger;
pub use record::{parse_amount, sanitize_amount, CostField, CostRecord, RecordUpdate};
